//! User service
//!
//! Registration and login for the demo flow:
//! - Registration stores a [`User`] with a placeholder password value
//! - Login performs no credential check at all
//!
//! Neither operation is a security boundary.

use crate::db::{DocumentStore, PersistenceError};
use crate::models::{Collection, EmailAddress, User};
use crate::services::password::placeholder_hash;

/// Input for registration and login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: EmailAddress,
    pub password: String,
}

pub struct UserService {
    store: DocumentStore,
}

impl UserService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Persist a new user and return its document id.
    ///
    /// Duplicate emails are not checked.
    pub async fn register(&self, input: &Credentials) -> Result<String, PersistenceError> {
        let user = User::new(
            input.name.clone(),
            &input.email,
            placeholder_hash(&input.password),
        );

        let id = self.store.create_document(User::NAME, &user).await?;
        tracing::info!("Registered user {}", id);
        Ok(id)
    }

    /// Stub login: always succeeds and echoes the email back.
    pub fn login(&self, input: &Credentials) -> EmailAddress {
        tracing::debug!("Login stub accepted {}", input.email);
        input.email.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, migrations, Filter};
    use serde_json::json;

    async fn setup_service() -> (DocumentStore, UserService) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        let store = DocumentStore::new(pool);
        (store.clone(), UserService::new(store))
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            name: None,
            email: EmailAddress::parse(email).unwrap(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_user_with_placeholder_hash() {
        let (store, service) = setup_service().await;

        service
            .register(&credentials("ada@example.com", "hunter2"))
            .await
            .expect("register should succeed");

        let filter: Filter = json!({ "email": "ada@example.com" }).as_object().cloned().unwrap();
        let users = store.get_documents(User::NAME, &filter, 10).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "User");
        assert_eq!(users[0]["password_hash"], "hash::hunter2");
    }

    #[tokio::test]
    async fn test_register_unavailable_store_fails() {
        let service = UserService::new(DocumentStore::unavailable());

        let result = service.register(&credentials("ada@example.com", "pw")).await;
        assert!(matches!(result, Err(PersistenceError::Unavailable)));
    }

    #[tokio::test]
    async fn test_login_never_checks_credentials() {
        let service = UserService::new(DocumentStore::unavailable());

        let email = service.login(&credentials("nobody@example.com", "wrong"));
        assert_eq!(email.as_str(), "nobody@example.com");
    }
}
