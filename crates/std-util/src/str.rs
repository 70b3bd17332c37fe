use heck::ToSnakeCase;

/// Converts a member or type name to `snake_case`.
///
/// Word boundaries are detected on case transitions, so `FirstName` becomes
/// `first_name` and `userId` becomes `user_id`. Names that are already
/// lowercase without separators are returned unchanged.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Returns the last segment of a possibly namespaced type name.
///
/// Both `.` and `::` separators are recognized.
pub fn simple_name(src: &str) -> &str {
    let src = src.rsplit("::").next().unwrap_or(src);
    src.rsplit('.').next().unwrap_or(src)
}
