use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use super::{ObjectStore, StoreError};

/// Object store backed by an S3 bucket.
#[derive(Debug)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client for `bucket` in `region`, with credentials resolved
    /// from the usual environment/profile/instance sources.
    pub async fn connect(region: String, bucket: String) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self { client: aws_sdk_s3::Client::new(&shared), bucket }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| StoreError::new(DisplayErrorContext(&err).to_string()))?;

        info!("Uploaded weather data to s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
