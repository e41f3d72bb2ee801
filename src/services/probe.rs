use crate::error::VerifyError;
use crate::models::RemoteObjectRef;
use crate::services::storage::StorageService;
use crate::utils::checksum::decode_transport_checksum;
use std::sync::Arc;

/// Reads the stored SHA-256 checksum of a remote object and returns it as lowercase hex.
pub struct RemoteObjectProbe {
    storage: Arc<dyn StorageService>,
}

impl RemoteObjectProbe {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    pub async fn fetch_checksum(&self, object: &RemoteObjectRef) -> Result<String, VerifyError> {
        let attributes = self.storage.get_object_checksum_attributes(object).await?;
        tracing::debug!(
            "Stored {} checksum of {}: {}",
            attributes.algorithm,
            object,
            attributes.value
        );
        decode_transport_checksum(&attributes.value)
    }
}
