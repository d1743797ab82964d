//! User model

use serde::{Deserialize, Serialize};

use super::{Collection, EmailAddress};

/// Display name stored when registration omits one
pub const DEFAULT_USER_NAME: &str = "User";

/// A registered user.
///
/// `password_hash` is a placeholder produced by
/// [`crate::services::password::placeholder_hash`]. It is NOT a cryptographic
/// hash and must not be treated as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Build a user record, defaulting a missing or empty name to `"User"`
    pub fn new(name: Option<String>, email: &EmailAddress, password_hash: String) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
        Self {
            name,
            email: email.to_string(),
            password_hash,
        }
    }
}

impl Collection for User {
    const NAME: &'static str = "user";
}
