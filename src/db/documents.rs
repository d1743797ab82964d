//! Document persistence
//!
//! A thin document-store layer over the SQL pool: every record is stored as a
//! JSON object in the `documents` table, grouped by collection name.
//!
//! The store may be constructed without a pool ([`DocumentStore::unavailable`]).
//! Every operation on such a store fails with [`PersistenceError::Unavailable`],
//! so handlers decide for themselves how to degrade.
//!
//! There is no retry, transaction or caching here. Errors go straight back
//! to the caller.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::Row;
use uuid::Uuid;

use crate::config::{DatabaseConfig, DatabaseDriver};
use crate::db::{migrations, pool, DynDatabasePool};

/// Exact-match field filter: every entry must equal the document's top-level field
pub type Filter = Map<String, Value>;

/// Errors raised by the document store
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// No database connection was established at startup
    #[error("Database not available")]
    Unavailable,

    /// The record could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record did not serialize to a JSON object
    #[error("Document must be a JSON object")]
    NotAnObject,

    /// A filter key that cannot be used as a field path
    #[error("Invalid filter field: {0}")]
    InvalidFilter(String),

    /// The database rejected the query
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Document store over an optional connection pool
#[derive(Clone)]
pub struct DocumentStore {
    pool: Option<DynDatabasePool>,
    url: Option<String>,
}

impl DocumentStore {
    /// Store backed by an existing pool
    pub fn new(pool: DynDatabasePool) -> Self {
        Self {
            pool: Some(pool),
            url: None,
        }
    }

    /// Store backed by a pool that was opened from `url`
    pub fn with_url(pool: DynDatabasePool, url: impl Into<String>) -> Self {
        Self {
            pool: Some(pool),
            url: Some(url.into()),
        }
    }

    /// Store with no connection; every operation fails with `Unavailable`
    pub fn unavailable() -> Self {
        Self {
            pool: None,
            url: None,
        }
    }

    /// Connect and migrate, falling back to an unavailable store on any failure.
    ///
    /// Startup must not fail because the database is missing or unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let Some(url) = config.url.clone() else {
            tracing::warn!("DATABASE_URL not set, running without persistence");
            return Self::unavailable();
        };

        let pool = match pool::create_pool(config).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("Database connection failed, running without persistence: {:#}", e);
                return Self::unavailable();
            }
        };

        if let Err(e) = migrations::run_migrations(&pool).await {
            tracing::warn!("Database migrations failed, running without persistence: {:#}", e);
            pool.close().await;
            return Self::unavailable();
        }

        tracing::info!("Database connected: {}", pool.driver());
        Self::with_url(pool, url)
    }

    /// Whether a connection was established
    pub fn is_available(&self) -> bool {
        self.pool.is_some()
    }

    /// Whether a connection URL was configured for this store
    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    /// The underlying pool, if connected
    pub fn pool(&self) -> Option<&DynDatabasePool> {
        self.pool.as_ref()
    }

    /// Display name of the connected database, derived from its URL
    pub fn database_name(&self) -> Option<String> {
        self.url.as_deref().and_then(database_name_from_url)
    }

    fn require_pool(&self) -> Result<&DynDatabasePool, PersistenceError> {
        self.pool.as_ref().ok_or(PersistenceError::Unavailable)
    }

    /// Insert `record` into `collection` and return its generated id.
    ///
    /// `created_at` and `updated_at` are stamped into the stored body unless
    /// the record already carries them.
    pub async fn create_document<T>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, PersistenceError>
    where
        T: Serialize + ?Sized,
    {
        let pool = self.require_pool()?;

        let mut body = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            _ => return Err(PersistenceError::NotAnObject),
        };
        let now = Value::String(Utc::now().to_rfc3339());
        body.entry("created_at").or_insert_with(|| now.clone());
        body.entry("updated_at").or_insert(now);

        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(&body)?;
        let sql = "INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)";

        if let Some(sqlite) = pool.as_sqlite() {
            sqlx::query(sql)
                .bind(&id)
                .bind(collection)
                .bind(&body)
                .execute(sqlite)
                .await?;
        } else if let Some(mysql) = pool.as_mysql() {
            sqlx::query(sql)
                .bind(&id)
                .bind(collection)
                .bind(&body)
                .execute(mysql)
                .await?;
        } else {
            return Err(PersistenceError::Unavailable);
        }

        tracing::debug!("Inserted document {} into {}", id, collection);
        Ok(id)
    }

    /// Fetch up to `limit` documents from `collection` matching `filter`.
    ///
    /// Matching is exact equality on top-level fields. Results come back in
    /// whatever order the database yields them. A non-positive `limit` means
    /// no limit. Each returned document carries its `id`.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Value>, PersistenceError> {
        let pool = self.require_pool()?;

        let mut clauses = Vec::with_capacity(filter.len());
        let mut binds = Vec::with_capacity(filter.len() * 2);
        for (field, value) in filter {
            if !is_valid_field(field) {
                return Err(PersistenceError::InvalidFilter(field.clone()));
            }
            binds.push(format!("$.{}", field));
            binds.push(serde_json::to_string(value)?);
            clauses.push(match pool.driver() {
                DatabaseDriver::Sqlite => "json_extract(body, ?) IS json_extract(?, '$')",
                DatabaseDriver::Mysql => "JSON_EXTRACT(body, ?) = CAST(? AS JSON)",
            });
        }

        let select = match pool.driver() {
            DatabaseDriver::Sqlite => "SELECT id, body FROM documents WHERE collection = ?",
            DatabaseDriver::Mysql => {
                "SELECT id, CAST(body AS CHAR) AS body FROM documents WHERE collection = ?"
            }
        };
        let mut sql = select.to_string();
        for clause in &clauses {
            sql.push_str(" AND ");
            sql.push_str(clause);
        }
        sql.push_str(" LIMIT ?");

        let limit = if limit > 0 {
            limit
        } else {
            match pool.driver() {
                DatabaseDriver::Sqlite => -1,
                DatabaseDriver::Mysql => i64::MAX,
            }
        };

        let rows: Vec<(String, String)> = if let Some(sqlite) = pool.as_sqlite() {
            let mut query = sqlx::query(&sql).bind(collection);
            for value in &binds {
                query = query.bind(value);
            }
            query
                .bind(limit)
                .fetch_all(sqlite)
                .await?
                .into_iter()
                .map(|r| (r.get("id"), r.get("body")))
                .collect()
        } else if let Some(mysql) = pool.as_mysql() {
            let mut query = sqlx::query(&sql).bind(collection);
            for value in &binds {
                query = query.bind(value);
            }
            query
                .bind(limit)
                .fetch_all(mysql)
                .await?
                .into_iter()
                .map(|r| (r.get("id"), r.get("body")))
                .collect()
        } else {
            return Err(PersistenceError::Unavailable);
        };

        rows.into_iter()
            .map(|(id, body)| -> Result<Value, PersistenceError> {
                let mut doc: Value = serde_json::from_str(&body)?;
                if let Value::Object(map) = &mut doc {
                    map.entry("id").or_insert(Value::String(id));
                }
                Ok(doc)
            })
            .collect()
    }

    /// Names of all collections that currently hold documents
    pub async fn list_collections(&self) -> Result<Vec<String>, PersistenceError> {
        let pool = self.require_pool()?;
        let sql = "SELECT DISTINCT collection FROM documents ORDER BY collection";

        let names: Vec<String> = if let Some(sqlite) = pool.as_sqlite() {
            sqlx::query(sql)
                .fetch_all(sqlite)
                .await?
                .into_iter()
                .map(|r| r.get("collection"))
                .collect()
        } else if let Some(mysql) = pool.as_mysql() {
            sqlx::query(sql)
                .fetch_all(mysql)
                .await?
                .into_iter()
                .map(|r| r.get("collection"))
                .collect()
        } else {
            return Err(PersistenceError::Unavailable);
        };

        Ok(names)
    }
}

/// Field names usable in a JSON path without quoting
fn is_valid_field(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derive a human-readable database name from a connection URL.
///
/// MySQL URLs yield the path segment (`mysql://host/landing` gives `landing`),
/// SQLite URLs the file stem; in-memory databases are reported as `memory`.
pub fn database_name_from_url(url: &str) -> Option<String> {
    let url = url.trim();
    let without_query = url.split('?').next().unwrap_or(url);

    match DatabaseDriver::from_url(url) {
        DatabaseDriver::Mysql => without_query
            .split_once("://")
            .and_then(|(_, rest)| rest.split_once('/'))
            .map(|(_, name)| name.trim_matches('/'))
            .filter(|name| !name.is_empty())
            .map(str::to_string),
        DatabaseDriver::Sqlite => {
            let path = without_query
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            if path.is_empty() || path == ":memory:" {
                return Some("memory".to_string());
            }
            std::path::Path::new(path)
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        }
    }
}
