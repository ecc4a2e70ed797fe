// ============================================================================
// Greeter
// ============================================================================

/// Name used when the caller gives none.
pub const DEFAULT_NAME: &str = "World";

/// Returns a greeting message.
///
/// `None` greets [`DEFAULT_NAME`]. The name is used verbatim, so an empty
/// string yields `"Hello, !"`.
///
/// # Example
/// ```
/// use my_module::greet;
///
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Python")), "Hello, Python!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
