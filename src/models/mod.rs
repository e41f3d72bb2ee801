use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file on the local filesystem that is about to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for LocalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Identity of an object in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteObjectRef {
    bucket_name: String,
    object_key: String,
}

impl RemoteObjectRef {
    pub fn new(bucket_name: impl Into<String>, object_key: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_key: object_key.into(),
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }
}

impl fmt::Display for RemoteObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bucket_name, self.object_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumAlgorithm {
    #[default]
    Sha256,
}

impl ChecksumAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "SHA256",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integrity options requested from the storage client at upload time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub checksum_algorithm: ChecksumAlgorithm,
}

/// Checksum attribute as stored by the backend. `value` is base64 over the raw digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumAttributes {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    UploadFailed,
    ChecksumsMatch,
    ChecksumsMismatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub duration: Duration,
    pub local_checksum: String,
    pub remote_checksum: String,
    pub matched: bool,
}

/// Result of one upload-and-verify run.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    UploadFailed { message: String },
    Verified(VerificationReport),
}

impl UploadOutcome {
    pub fn success(&self) -> bool {
        matches!(self, UploadOutcome::Verified(_))
    }

    pub fn matched(&self) -> bool {
        matches!(self, UploadOutcome::Verified(report) if report.matched)
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        match self {
            UploadOutcome::Verified(report) => Some(report.duration.as_secs_f64()),
            UploadOutcome::UploadFailed { .. } => None,
        }
    }

    pub fn local_checksum(&self) -> Option<&str> {
        match self {
            UploadOutcome::Verified(report) => Some(&report.local_checksum),
            UploadOutcome::UploadFailed { .. } => None,
        }
    }

    pub fn remote_checksum(&self) -> Option<&str> {
        match self {
            UploadOutcome::Verified(report) => Some(&report.remote_checksum),
            UploadOutcome::UploadFailed { .. } => None,
        }
    }

    pub fn state(&self) -> TerminalState {
        match self {
            UploadOutcome::UploadFailed { .. } => TerminalState::UploadFailed,
            UploadOutcome::Verified(report) if report.matched => TerminalState::ChecksumsMatch,
            UploadOutcome::Verified(_) => TerminalState::ChecksumsMismatch,
        }
    }
}
