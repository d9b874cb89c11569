//! Object storage abstraction for uploaded images.
//!
//! Badges and photos are stored under per-kind namespaces so that school
//! badges, administrator photos and player photos never collide.

use std::path::PathBuf;

use crate::{AppError, AppResult};

/// Storage namespace for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageNamespace {
    /// School badge images.
    SchoolBadges,
    /// Administrator profile photos.
    AdminPhotos,
    /// Player photos.
    PlayerPhotos,
}

impl StorageNamespace {
    /// The bucket/directory name for this namespace.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SchoolBadges => "school-badges",
            Self::AdminPhotos => "admin-photos",
            Self::PlayerPhotos => "player-photos",
        }
    }
}

impl std::fmt::Display for StorageNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded file metadata.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Storage key (path within the namespace).
    pub key: String,
    /// Public URL to access the file.
    pub url: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME content type.
    pub content_type: String,
    /// MD5 hash of the file.
    pub md5: String,
}

/// Storage backend trait.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Upload a file into a namespace.
    async fn upload(
        &self,
        namespace: StorageNamespace,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> AppResult<UploadedFile>;

    /// Delete a file.
    async fn delete(&self, namespace: StorageNamespace, key: &str) -> AppResult<()>;

    /// Get the public URL for a key.
    fn public_url(&self, namespace: StorageNamespace, key: &str) -> String;

    /// Check if a file exists.
    async fn exists(&self, namespace: StorageNamespace, key: &str) -> AppResult<bool>;
}

/// Local filesystem storage backend.
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new local storage backend.
    #[must_use]
    pub const fn new(base_path: PathBuf, base_url: String) -> Self {
        Self { base_path, base_url }
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalStorage {
    async fn upload(
        &self,
        namespace: StorageNamespace,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> AppResult<UploadedFile> {
        let path = self.base_path.join(namespace.as_str()).join(key);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Upload(format!("Failed to create directory: {e}")))?;
        }

        // Write file
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to write file: {e}")))?;

        // Calculate MD5
        let md5 = format!("{:x}", md5::compute(data));

        Ok(UploadedFile {
            key: key.to_string(),
            url: self.public_url(namespace, key),
            size: data.len() as u64,
            content_type: content_type.to_string(),
            md5,
        })
    }

    async fn delete(&self, namespace: StorageNamespace, key: &str) -> AppResult<()> {
        let path = self.base_path.join(namespace.as_str()).join(key);
        if path.exists() {
            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| AppError::Upload(format!("Failed to delete file: {e}")))?;
        }
        Ok(())
    }

    fn public_url(&self, namespace: StorageNamespace, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            namespace.as_str(),
            key
        )
    }

    async fn exists(&self, namespace: StorageNamespace, key: &str) -> AppResult<bool> {
        let path = self.base_path.join(namespace.as_str()).join(key);
        Ok(path.exists())
    }
}

/// Generate a storage key for an upload.
///
/// The key is derived from the owning identity and the upload timestamp,
/// with the original file's extension preserved.
#[must_use]
pub fn generate_storage_key(owner_id: &str, original_name: &str) -> String {
    use chrono::Utc;

    let timestamp = Utc::now().timestamp_millis();

    // Extract extension from original name
    let extension = original_name
        .rfind('.')
        .filter(|&pos| pos > 0 && pos < original_name.len() - 1)
        .map(|pos| &original_name[pos + 1..])
        .filter(|ext| ext.len() <= 10 && !ext.is_empty())
        .unwrap_or("bin");

    format!("{owner_id}/{timestamp}_{}.{extension}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_storage_key() {
        let key = generate_storage_key("school123", "badge.png");
        assert!(key.starts_with("school123/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn test_generate_storage_key_no_extension() {
        let key = generate_storage_key("school123", "badge");
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_namespace_names() {
        assert_eq!(StorageNamespace::SchoolBadges.as_str(), "school-badges");
        assert_eq!(StorageNamespace::AdminPhotos.as_str(), "admin-photos");
        assert_eq!(StorageNamespace::PlayerPhotos.as_str(), "player-photos");
    }
}
