//! Blog listing service
//!
//! Reads published posts from the document store. When the store cannot be
//! read and [`BlogPolicy::degrade_to_demo_content`] is set, the listing
//! returns a single built-in demo post instead of an error. Callers then
//! cannot tell an outage from a quiet blog; turn the policy off to surface
//! the failure.

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::BlogConfig;
use crate::db::{DocumentStore, Filter, PersistenceError};
use crate::models::{BlogPost, Collection};

/// Slug of the built-in fallback post
pub const DEMO_POST_SLUG: &str = "welcome";

/// How the listing behaves when the store fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPolicy {
    pub degrade_to_demo_content: bool,
    pub listing_limit: i64,
}

impl Default for BlogPolicy {
    fn default() -> Self {
        BlogConfig::default().into()
    }
}

impl From<BlogConfig> for BlogPolicy {
    fn from(config: BlogConfig) -> Self {
        Self {
            degrade_to_demo_content: config.degrade_to_demo_content,
            listing_limit: config.listing_limit,
        }
    }
}

/// The post served when the store is unreachable
pub fn demo_post() -> BlogPost {
    BlogPost {
        title: "Welcome to our blog".to_string(),
        slug: DEMO_POST_SLUG.to_string(),
        excerpt: Some("Insights on building modern SaaS.".to_string()),
        content: "This is a demo post. Connect the database to fetch real posts.".to_string(),
        author: "Team".to_string(),
        tags: vec!["saas".to_string(), "product".to_string()],
        published: true,
        published_at: Some(Utc::now()),
    }
}

pub struct BlogService {
    store: DocumentStore,
    policy: BlogPolicy,
}

impl BlogService {
    pub fn new(store: DocumentStore, policy: BlogPolicy) -> Self {
        Self { store, policy }
    }

    /// List published posts, applying the demo fallback policy on failure
    pub async fn list_published(&self) -> Result<Vec<BlogPost>, PersistenceError> {
        match self.fetch_published().await {
            Ok(posts) => Ok(posts),
            Err(e) if self.policy.degrade_to_demo_content => {
                tracing::warn!("Blog listing failed, serving demo content: {}", e);
                Ok(vec![demo_post()])
            }
            Err(e) => {
                tracing::error!("Blog listing failed: {}", e);
                Err(e)
            }
        }
    }

    async fn fetch_published(&self) -> Result<Vec<BlogPost>, PersistenceError> {
        let filter = published_filter();
        let docs = self
            .store
            .get_documents(BlogPost::NAME, &filter, self.policy.listing_limit)
            .await?;

        Ok(docs.into_iter().filter_map(map_document).collect())
    }
}

fn published_filter() -> Filter {
    let mut filter = Filter::new();
    filter.insert("published".to_string(), json!(true));
    filter
}

/// Documents that don't fit the post shape are skipped, not fatal
fn map_document(doc: Value) -> Option<BlogPost> {
    let id = doc.get("id").and_then(Value::as_str).unwrap_or("?").to_string();
    match BlogPost::from_document(doc) {
        Ok(post) => Some(post),
        Err(e) => {
            tracing::warn!("Skipping malformed blog post {}: {}", id, e);
            None
        }
    }
}
