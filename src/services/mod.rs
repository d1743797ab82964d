//! Services layer - Business logic
//!
//! Services sit between the HTTP handlers and the document store:
//! - Static pricing catalogue
//! - Demo registration/login and the placeholder password value
//! - Contact form persistence
//! - Blog listing with its demo-content fallback
//! - Database diagnostics

pub mod blog;
pub mod contact;
pub mod diagnostics;
pub mod password;
pub mod pricing;
pub mod user;

pub use blog::{demo_post, BlogPolicy, BlogService, DEMO_POST_SLUG};
pub use contact::ContactService;
pub use diagnostics::{inspect, DiagnosticReport};
pub use password::placeholder_hash;
pub use user::{Credentials, UserService};
