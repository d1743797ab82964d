//! Placeholder password "hashing"
//!
//! # Security
//!
//! This is NOT a password hash. The stored value is the raw password behind a
//! fixed `hash::` prefix, kept only so the demo registration flow has
//! something to persist. Never use it to protect real credentials.

/// Prefix put in front of the raw password
pub const PLACEHOLDER_PREFIX: &str = "hash::";

/// Build the placeholder stored in `User::password_hash`.
///
/// ```ignore
/// use saas_landing::services::password::placeholder_hash;
///
/// assert_eq!(placeholder_hash("secret"), "hash::secret");
/// ```
pub fn placeholder_hash(password: &str) -> String {
    format!("{}{}", PLACEHOLDER_PREFIX, password)
}
