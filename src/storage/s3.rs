use anyhow::Result;
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use super::ObjectStore;

pub struct S3Client {
    client: Client,
}

impl S3Client {
    pub async fn new() -> Result<Self> {
        let region_provider = RegionProviderChain::default_provider()
            .or_else("us-east-1");

        let config = aws_config::from_env()
            .region(region_provider)
            .load()
            .await;

        let client = Client::new(&config);

        Ok(S3Client { client })
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_public(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let body = ByteStream::from(data);

        self.client
            .put_object()
            .acl(ObjectCannedAcl::PublicRead)
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await?;

        Ok(public_url(bucket, key))
    }
}

/// Virtual-hosted-style URL for an object in a public bucket.
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}
