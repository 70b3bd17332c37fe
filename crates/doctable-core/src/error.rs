mod adhoc;
mod duplicate_column_name;
mod invalid_subclass;
mod missing_identity;
mod unknown_member;

use adhoc::AdhocError;
use duplicate_column_name::DuplicateColumnNameError;
use invalid_subclass::InvalidSubclassError;
use missing_identity::MissingIdentityError;
use std::sync::Arc;
use unknown_member::UnknownMemberError;

/// Returns early with an ad-hoc formatted error.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc formatted error.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while configuring a document mapping.
///
/// Every error is raised synchronously by the configuration step that caused
/// it. Nothing in this crate performs I/O, so no error is retryable.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: Arc<ErrorKind>,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let Some(inner) = consequent.inner else {
            return self.context_impl(Error::from(ErrorKind::Unknown));
        };

        // A shared consequent is copied rather than mutated; its kind is
        // behind an `Arc`, so the copy is cheap.
        let (kind, cause) = match Arc::try_unwrap(inner) {
            Ok(inner) => (inner.kind, inner.cause),
            Err(shared) => (shared.kind.clone(), shared.cause.clone()),
        };

        // `self` always ends up at the bottom of the chain.
        let cause = match cause {
            Some(cause) => self.context_impl(cause),
            None => self,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(cause),
            })),
        }
    }

    /// The innermost error of the context chain, i.e. the error that was
    /// raised first.
    pub fn root_cause(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &*inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnknownMember(UnknownMemberError),
    InvalidSubclass(InvalidSubclassError),
    DuplicateColumnName(DuplicateColumnNameError),
    MissingIdentity(MissingIdentityError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnknownMember(err) => core::fmt::Display::fmt(err, f),
            InvalidSubclass(err) => core::fmt::Display::fmt(err, f),
            DuplicateColumnName(err) => core::fmt::Display::fmt(err, f),
            MissingIdentity(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown doctable error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind: Arc::new(kind),
                cause: None,
            })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_chain_display() {
        let root = Error::unknown_member("User", "Nickname");
        let top = err!("duplicating field `Nickname`");

        let chained = root.context(top);
        assert_eq!(
            chained.to_string(),
            "duplicating field `Nickname`: unknown member `Nickname` on document type `User`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("introspection failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "introspection failed");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn kinds_are_distinguishable() {
        let err = Error::invalid_subclass("User", "Squad");
        assert!(err.is_invalid_subclass());
        assert!(!err.is_unknown_member());

        let err = Error::duplicate_column_name("first_name");
        assert!(err.is_duplicate_column_name());

        let err = Error::missing_identity("Tag");
        assert!(err.is_missing_identity());
    }

    #[test]
    fn context_keeps_root_kind_reachable_in_display() {
        let err = Error::duplicate_column_name("mt_version").context(err!("configuring `User`"));
        assert_eq!(
            err.to_string(),
            "configuring `User`: duplicate column name `mt_version`"
        );
        assert!(!err.is_duplicate_column_name());
        assert!(err.root_cause().is_duplicate_column_name());
    }

    #[test]
    fn context_with_shared_consequent_keeps_the_root() {
        let outer = err!("configuring `User`");
        let shared = outer.clone();

        let err = Error::duplicate_column_name("x").context(outer);
        assert_eq!(
            err.to_string(),
            "configuring `User`: duplicate column name `x`"
        );
        assert!(err.root_cause().is_duplicate_column_name());
        assert_eq!(shared.to_string(), "configuring `User`");
    }

    #[test]
    fn context_with_chained_consequent_appends_to_the_end() {
        let outer = err!("building registry").context(err!("loading `User`"));
        let err = Error::unknown_member("User", "Nickname").context(outer);

        assert_eq!(
            err.to_string(),
            "loading `User`: building registry: unknown member `Nickname` on document type `User`"
        );
        assert!(err.root_cause().is_unknown_member());
    }
}
