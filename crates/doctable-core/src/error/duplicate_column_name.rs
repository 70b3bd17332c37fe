use super::Error;

/// Error when a duplicated field would reuse an existing column name.
///
/// This occurs when:
/// - Two duplicated fields resolve to the same column name
/// - A duplicated field resolves to a reserved system column name
/// - The primary key member is duplicated (it already owns `id`)
///
/// The column is never silently renamed.
#[derive(Debug)]
pub(super) struct DuplicateColumnNameError {
    column: Box<str>,
}

impl std::error::Error for DuplicateColumnNameError {}

impl core::fmt::Display for DuplicateColumnNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate column name `{}`", self.column)
    }
}

impl Error {
    /// Creates a duplicate column name error.
    pub fn duplicate_column_name(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumnName(
            DuplicateColumnNameError {
                column: column.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a duplicate column name error.
    pub fn is_duplicate_column_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumnName(_))
    }
}
