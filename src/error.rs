use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl From<base64::DecodeError> for VerifyError {
    fn from(e: base64::DecodeError) -> Self {
        VerifyError::Decode(e.to_string())
    }
}

impl VerifyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, VerifyError::NotFound(_))
    }
}
