//! Contact form message

use serde::{Deserialize, Serialize};

use super::{Collection, EmailAddress};

/// A message submitted through the contact form. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
}

impl Collection for ContactMessage {
    const NAME: &'static str = "contactmessage";
}
