pub mod s3;

use async_trait::async_trait;

pub use s3::S3Client;

/// Capability for publishing bytes under a key with public-read visibility.
///
/// Returns the object's public URL. The production implementation is backed
/// by S3; tests substitute a recording fake.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_public(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<String>;
}
