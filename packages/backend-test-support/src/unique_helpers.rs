//! Test helpers for generating unique test data
//!
//! ULID-based helpers so concurrent tests never collide on row values.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("run");
/// let id2 = unique_str("run");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("run-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name for game completion rows
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_user_name;
///
/// let a = unique_user_name();
/// let b = unique_user_name();
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_user_name() -> String {
    unique_str("player")
}
