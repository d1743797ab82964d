//! Application state shared across handlers

use std::sync::Arc;

use crate::db::DocumentStore;
use crate::services::{BlogPolicy, BlogService, ContactService, UserService};

/// Shared state handed to every handler.
///
/// The store may be unavailable; services report that per call.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub user_service: Arc<UserService>,
    pub contact_service: Arc<ContactService>,
    pub blog_service: Arc<BlogService>,
}

impl AppState {
    pub fn new(store: DocumentStore, blog_policy: BlogPolicy) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store.clone())),
            contact_service: Arc::new(ContactService::new(store.clone())),
            blog_service: Arc::new(BlogService::new(store.clone(), blog_policy)),
            store,
        }
    }
}
