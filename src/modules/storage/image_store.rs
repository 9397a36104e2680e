//! Image persistence for admin uploads.
//!
//! Uploads go to an S3-compatible host when one is configured, otherwise
//! to a local public directory. Either way the caller gets back a single
//! URL string to substitute into the document being saved.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::{CloudStorageConfig, StorageConfig};
use crate::core::error::AppError;

/// Image content types accepted by upload handlers.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum image upload size: 8MB
pub const MAX_IMAGE_SIZE: usize = 8 * 1024 * 1024;

/// An image file lifted out of a multipart form, not yet persisted.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Destination for uploaded images.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Persist image bytes and return the URL to reference them by.
    async fn store(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError>;

    /// Remove a previously stored image by the URL `store` returned.
    /// Unknown URLs are ignored.
    async fn delete_by_url(&self, url: &str) -> Result<(), AppError>;
}

/// Build the configured image host: cloud when S3 settings are present,
/// local disk otherwise.
pub async fn build_image_host(
    config: &StorageConfig,
) -> Result<std::sync::Arc<dyn ImageHost>, AppError> {
    match &config.cloud {
        Some(cloud) => {
            let host = CloudImageHost::new(cloud.clone()).await?;
            info!(
                "Image uploads go to cloud bucket '{}' at {}",
                cloud.bucket, cloud.endpoint
            );
            Ok(std::sync::Arc::new(host))
        }
        None => {
            let host = LocalImageStore::new(
                config.local_dir.clone(),
                config.local_public_base.clone(),
            );
            info!("Image uploads go to local directory '{}'", config.local_dir);
            Ok(std::sync::Arc::new(host))
        }
    }
}

/// Derive a file extension from a content type, falling back to the
/// original filename's extension.
fn extension_for(content_type: &str, original_filename: &str) -> String {
    match content_type {
        "image/jpeg" => "jpg".to_string(),
        "image/png" => "png".to_string(),
        "image/gif" => "gif".to_string(),
        "image/webp" => "webp".to_string(),
        _ => original_filename
            .rsplit('.')
            .next()
            .unwrap_or("bin")
            .to_string(),
    }
}

// =============================================================================
// CLOUD (S3-compatible)
// =============================================================================

pub struct CloudImageHost {
    bucket: Box<Bucket>,
    public_endpoint: String,
    key_prefix: String,
}

impl CloudImageHost {
    pub async fn new(config: CloudStorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // Path-style URLs (http://endpoint/bucket) for MinIO compatibility
        bucket.set_path_style();

        let host = Self {
            bucket,
            public_endpoint: config.public_endpoint,
            key_prefix: config.key_prefix,
        };

        host.ensure_bucket_exists(&region, &credentials).await?;

        Ok(host)
    }

    /// Create the bucket if it does not exist yet.
    async fn ensure_bucket_exists(
        &self,
        region: &Region,
        credentials: &Credentials,
    ) -> Result<(), AppError> {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            region.clone(),
            credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => {
                info!("Bucket '{}' created", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Extract the object key from a URL this host produced.
    fn key_from_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/{}/", self.public_endpoint, self.bucket.name());
        url.strip_prefix(&prefix).map(|k| k.to_string())
    }
}

#[async_trait]
impl ImageHost for CloudImageHost {
    async fn store(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let extension = extension_for(content_type, original_filename);
        let key = format!("{}/{}.{}", self.key_prefix, Uuid::new_v4(), extension);

        self.bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload image '{}': {}", key, e)))?;

        debug!("Uploaded image '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(&key))
    }

    async fn delete_by_url(&self, url: &str) -> Result<(), AppError> {
        let Some(key) = self.key_from_url(url) else {
            debug!("Skipping delete for foreign image URL: {}", url);
            return Ok(());
        };

        self.bucket
            .delete_object(&key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete image '{}': {}", key, e)))?;

        debug!("Deleted image '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }
}

// =============================================================================
// LOCAL DISK FALLBACK
// =============================================================================

pub struct LocalImageStore {
    dir: PathBuf,
    public_base: String,
}

impl LocalImageStore {
    pub fn new(dir: String, public_base: String) -> Self {
        Self {
            dir: PathBuf::from(dir),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    fn relative_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_base, file_name)
    }

    fn file_name_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(&format!("{}/", self.public_base))
            .filter(|rest| !rest.contains('/'))
    }
}

#[async_trait]
impl ImageHost for LocalImageStore {
    async fn store(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let extension = extension_for(content_type, original_filename);
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::Internal(format!("Failed to write image '{}': {}", path.display(), e))
        })?;

        debug!("Wrote image to {}", path.display());
        Ok(self.relative_url(&file_name))
    }

    async fn delete_by_url(&self, url: &str) -> Result<(), AppError> {
        let Some(file_name) = self.file_name_from_url(url) else {
            debug!("Skipping delete for foreign image URL: {}", url);
            return Ok(());
        };

        let path = self.dir.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!(
                "Failed to delete image '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_prefers_content_type() {
        assert_eq!(extension_for("image/png", "photo.jpeg"), "png");
        assert_eq!(extension_for("image/webp", "upload"), "webp");
    }

    #[test]
    fn extension_falls_back_to_filename() {
        assert_eq!(extension_for("application/octet-stream", "raw.heic"), "heic");
        assert_eq!(extension_for("application/octet-stream", "noext"), "noext");
        assert_eq!(extension_for("", ""), "bin");
    }

    #[test]
    fn local_urls_are_relative_paths() {
        let store = LocalImageStore::new("public".to_string(), "/uploads/".to_string());
        assert_eq!(store.relative_url("a.png"), "/uploads/a.png");
        assert_eq!(store.file_name_from_url("/uploads/a.png"), Some("a.png"));
        assert_eq!(store.file_name_from_url("https://elsewhere/a.png"), None);
        // Path traversal does not resolve to a local file name
        assert_eq!(store.file_name_from_url("/uploads/../secret"), None);
    }

    #[tokio::test]
    async fn local_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("artistry-test-{}", Uuid::new_v4()));
        let store = LocalImageStore::new(
            dir.to_string_lossy().to_string(),
            "/uploads".to_string(),
        );

        let url = store
            .store("swatch.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        store.delete_by_url(&url).await.unwrap();
        // Deleting again is a no-op
        store.delete_by_url(&url).await.unwrap();

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
