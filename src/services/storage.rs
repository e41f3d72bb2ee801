use crate::error::VerifyError;
use crate::models::{ChecksumAlgorithm, ChecksumAttributes, RemoteObjectRef, UploadOptions};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectAttributes;
use std::path::Path;

/// Object storage collaborator: transfers files and answers checksum queries.
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload_file(
        &self,
        path: &Path,
        object: &RemoteObjectRef,
        options: &UploadOptions,
    ) -> Result<(), VerifyError>;

    /// Metadata-only lookup of the stored checksum; object content is not downloaded.
    async fn get_object_checksum_attributes(
        &self,
        object: &RemoteObjectRef,
    ) -> Result<ChecksumAttributes, VerifyError>;
}

pub struct S3StorageService {
    client: Client,
}

impl S3StorageService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn sdk_checksum_algorithm(algorithm: ChecksumAlgorithm) -> aws_sdk_s3::types::ChecksumAlgorithm {
    match algorithm {
        ChecksumAlgorithm::Sha256 => aws_sdk_s3::types::ChecksumAlgorithm::Sha256,
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload_file(
        &self,
        path: &Path,
        object: &RemoteObjectRef,
        options: &UploadOptions,
    ) -> Result<(), VerifyError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| VerifyError::Upload(format!("{}: {}", path.display(), e)))?;

        let res = self
            .client
            .put_object()
            .bucket(object.bucket_name())
            .key(object.object_key())
            .checksum_algorithm(sdk_checksum_algorithm(options.checksum_algorithm))
            .body(body)
            .send()
            .await;

        if let Err(e) = res {
            tracing::error!(
                "S3 put_object failed: {}, error={:?}",
                object,
                e
            );
            return Err(VerifyError::Upload(DisplayErrorContext(&e).to_string()));
        }
        Ok(())
    }

    async fn get_object_checksum_attributes(
        &self,
        object: &RemoteObjectRef,
    ) -> Result<ChecksumAttributes, VerifyError> {
        let res = self
            .client
            .get_object_attributes()
            .bucket(object.bucket_name())
            .key(object.object_key())
            .object_attributes(ObjectAttributes::Checksum)
            .send()
            .await;

        let output = match res {
            Ok(output) => output,
            Err(e) => {
                let not_found = e
                    .as_service_error()
                    .map(|se| se.is_no_such_key() || se.code() == Some("NotFound"))
                    .unwrap_or(false);
                if not_found {
                    return Err(VerifyError::NotFound(format!("object {}", object)));
                }
                return Err(VerifyError::Transport(
                    DisplayErrorContext(&e).to_string(),
                ));
            }
        };

        let value = output
            .checksum()
            .and_then(|c| c.checksum_sha256())
            .ok_or_else(|| {
                VerifyError::NotFound(format!("SHA256 checksum attribute of {}", object))
            })?;

        Ok(ChecksumAttributes {
            algorithm: ChecksumAlgorithm::Sha256,
            value: value.to_string(),
        })
    }
}
