//! Contact form service

use crate::db::{DocumentStore, PersistenceError};
use crate::models::{Collection, ContactMessage};

pub struct ContactService {
    store: DocumentStore,
}

impl ContactService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Store a contact message and return its document id
    pub async fn submit(&self, message: &ContactMessage) -> Result<String, PersistenceError> {
        let id = self
            .store
            .create_document(ContactMessage::NAME, message)
            .await?;
        tracing::info!("Stored contact message {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, migrations, Filter};
    use crate::models::EmailAddress;

    #[tokio::test]
    async fn test_submit_creates_one_message() {
        let pool = create_test_pool().await.unwrap();
        migrations::run_migrations(&pool).await.unwrap();
        let store = DocumentStore::new(pool);
        let service = ContactService::new(store.clone());

        let message = ContactMessage {
            name: "Ada".to_string(),
            email: EmailAddress::parse("ada@example.com").unwrap(),
            message: "Hello".to_string(),
        };
        service.submit(&message).await.unwrap();

        let stored = store
            .get_documents(ContactMessage::NAME, &Filter::new(), 0)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["message"], "Hello");
    }

    #[tokio::test]
    async fn test_submit_propagates_unavailable() {
        let service = ContactService::new(DocumentStore::unavailable());
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: EmailAddress::parse("ada@example.com").unwrap(),
            message: "Hello".to_string(),
        };

        assert!(matches!(
            service.submit(&message).await,
            Err(PersistenceError::Unavailable)
        ));
    }
}
