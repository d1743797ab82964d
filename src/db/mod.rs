//! Database layer
//!
//! Supports:
//! - SQLite (default, file path or `sqlite:` URL)
//! - MySQL (`mysql://` URL)
//!
//! The driver is selected from the connection URL. On top of the pool sits a
//! small document store ([`documents::DocumentStore`]) that keeps JSON records
//! grouped by collection name.
//!
//! # Usage
//!
//! ```ignore
//! use saas_landing::config::DatabaseConfig;
//! use saas_landing::db::DocumentStore;
//!
//! let store = DocumentStore::connect(&DatabaseConfig::with_url("data/landing.db")).await;
//! let id = store.create_document("contactmessage", &message).await?;
//! ```

pub mod documents;
pub mod migrations;
pub mod pool;

pub use documents::{DocumentStore, Filter, PersistenceError};
pub use pool::{
    create_pool, create_test_pool, DatabasePool, DynDatabasePool, MysqlDatabase, SqliteDatabase,
};
