//! Blog post model
//!
//! Posts are written by external tooling; this service only reads them. Stored
//! documents may omit any field, so deserialisation fills the same defaults
//! the listing has always used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// Blog post as stored and as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_slug")]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_slug() -> String {
    "post".to_string()
}

impl BlogPost {
    /// Map a stored document onto a post, filling defaults for missing fields.
    ///
    /// Extra fields (`id`, timestamps) are ignored.
    pub fn from_document(doc: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(doc)
    }
}

impl Collection for BlogPost {
    const NAME: &'static str = "blogpost";
}
