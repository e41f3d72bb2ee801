use crate::error::VerifyError;
use crate::models::{LocalFile, RemoteObjectRef, UploadOptions, UploadOutcome, VerificationReport};
use crate::services::probe::RemoteObjectProbe;
use crate::services::report::Reporter;
use crate::services::storage::StorageService;
use crate::utils::hash::digest_file;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Uploads one file, then verifies the stored checksum against a local digest.
pub struct UploadCoordinator {
    storage: Arc<dyn StorageService>,
    probe: RemoteObjectProbe,
    reporter: Arc<dyn Reporter>,
}

impl UploadCoordinator {
    pub fn new(storage: Arc<dyn StorageService>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            probe: RemoteObjectProbe::new(storage.clone()),
            storage,
            reporter,
        }
    }

    /// Runs the pipeline: upload, time, hash locally, fetch remote checksum, compare.
    ///
    /// A failed upload is not an error; it ends the run with
    /// [`UploadOutcome::UploadFailed`] before any checksum work. Failures after a
    /// successful upload are returned as `Err`.
    pub async fn run(
        &self,
        bucket_name: &str,
        object_key: &str,
        local_path: impl Into<PathBuf>,
    ) -> Result<UploadOutcome, VerifyError> {
        let local_file = LocalFile::new(local_path);
        let object = RemoteObjectRef::new(bucket_name, object_key);
        let options = UploadOptions::default();

        let start = Instant::now();
        if let Err(e) = self
            .storage
            .upload_file(local_file.path(), &object, &options)
            .await
        {
            let message = e.to_string();
            self.reporter.upload_failed(&message);
            return Ok(UploadOutcome::UploadFailed { message });
        }
        let duration = start.elapsed();

        self.reporter.upload_succeeded(&local_file, &object);
        self.reporter.upload_duration(duration);

        self.reporter.comparing();
        let local_checksum = digest_file(local_file.path()).await?;
        let remote_checksum = self.probe.fetch_checksum(&object).await?;

        let matched = local_checksum == remote_checksum;
        if matched {
            self.reporter.checksums_match(&local_checksum);
        } else {
            self.reporter
                .checksums_mismatch(&local_checksum, &remote_checksum);
        }

        Ok(UploadOutcome::Verified(VerificationReport {
            duration,
            local_checksum,
            remote_checksum,
            matched,
        }))
    }
}
