//! Object-store collaborator and its storage-backend adapter.

use std::sync::Arc;

use usra_common::{AppResult, StorageBackend, StorageNamespace};

/// A stored object reference: storage key plus public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Storage key within the namespace.
    pub key: String,
    /// Public URL for display.
    pub url: String,
}

impl StoredObject {
    /// Split into `(key, url)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.url)
    }
}

/// Object-store collaborator used by the registration wizard and player
/// registration. Failures surface as [`usra_common::AppError::Upload`].
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload raw bytes under a namespace + key.
    async fn upload(
        &self,
        namespace: StorageNamespace,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> AppResult<StoredObject>;

    /// Public URL for an existing key.
    fn public_url(&self, namespace: StorageNamespace, key: &str) -> String;
}

/// Production adapter over a [`StorageBackend`].
#[derive(Clone)]
pub struct StorageService {
    backend: Arc<dyn StorageBackend>,
}

impl StorageService {
    /// Create a new storage service over a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl ObjectStore for StorageService {
    async fn upload(
        &self,
        namespace: StorageNamespace,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> AppResult<StoredObject> {
        let uploaded = self.backend.upload(namespace, key, data, content_type).await?;

        tracing::debug!(
            namespace = %namespace,
            key = %uploaded.key,
            size = uploaded.size,
            "File uploaded"
        );

        Ok(StoredObject {
            key: uploaded.key,
            url: uploaded.url,
        })
    }

    fn public_url(&self, namespace: StorageNamespace, key: &str) -> String {
        self.backend.public_url(namespace, key)
    }
}
