use super::Error;

/// Error when a registered subclass does not derive from the mapped type.
#[derive(Debug)]
pub(super) struct InvalidSubclassError {
    root: Box<str>,
    sub_class: Box<str>,
}

impl std::error::Error for InvalidSubclassError {}

impl core::fmt::Display for InvalidSubclassError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid subclass: `{}` is not a subtype of `{}`",
            self.sub_class, self.root
        )
    }
}

impl Error {
    /// Creates an invalid subclass error.
    pub fn invalid_subclass(root: impl Into<String>, sub_class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSubclass(InvalidSubclassError {
            root: root.into().into(),
            sub_class: sub_class.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid subclass error.
    pub fn is_invalid_subclass(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSubclass(_))
    }
}
