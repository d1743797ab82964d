//! Data models
//!
//! Records exchanged with the document store (User, ContactMessage, BlogPost)
//! and the static pricing catalogue types.

mod blog_post;
mod contact_message;
mod email;
mod pricing;
mod user;

pub use blog_post::BlogPost;
pub use contact_message::ContactMessage;
pub use email::{EmailAddress, InvalidEmail};
pub use pricing::PricingPlan;
pub use user::{User, DEFAULT_USER_NAME};

/// A record type that lives in a named document collection
pub trait Collection {
    /// Collection name in the document store
    const NAME: &'static str;
}
