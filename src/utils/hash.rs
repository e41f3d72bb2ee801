use crate::error::VerifyError;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read size used when streaming a file through the hasher.
pub const HASH_CHUNK_SIZE: usize = 1024;

pub fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

pub async fn calculate_hash_from_reader<R: AsyncRead + Unpin>(
    mut reader: R,
) -> Result<String, VerifyError> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Streams the file at `path` through SHA-256 and returns the lowercase hex digest.
///
/// The file is never held in memory as a whole, so this works for files larger
/// than available RAM.
pub async fn digest_file(path: impl AsRef<Path>) -> Result<String, VerifyError> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;
    let hash = calculate_hash_from_reader(file).await?;
    tracing::debug!("SHA-256 of {}: {}", path.display(), hash);
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn temp_file_with(data: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_calculate_hash() {
        let data = b"hello world";
        let hash = calculate_hash(data);
        // SHA-256 for "hello world"
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_calculate_hash_empty() {
        assert_eq!(calculate_hash(b""), EMPTY_SHA256);
    }

    #[tokio::test]
    async fn test_calculate_hash_from_reader() {
        let data = b"hello world";
        let hash = calculate_hash_from_reader(&data[..]).await.unwrap();
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[tokio::test]
    async fn test_digest_empty_file() {
        let file = temp_file_with(b"");
        let hash = digest_file(file.path()).await.unwrap();
        assert_eq!(hash, EMPTY_SHA256);
        assert_eq!(hash.len(), 64);
    }

    #[tokio::test]
    async fn test_digest_chunk_boundaries() {
        for size in [
            HASH_CHUNK_SIZE - 1,
            HASH_CHUNK_SIZE,
            HASH_CHUNK_SIZE + 1,
            HASH_CHUNK_SIZE * 3,
        ] {
            let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
            let file = temp_file_with(&data);
            let hash = digest_file(file.path()).await.unwrap();
            assert_eq!(hash, calculate_hash(&data), "size {}", size);
        }
    }

    #[tokio::test]
    async fn test_digest_is_deterministic() {
        let file = temp_file_with(b"the same bytes every time");
        let first = digest_file(file.path()).await.unwrap();
        let second = digest_file(file.path()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_digest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = digest_file(dir.path().join("does-not-exist.bin")).await;
        assert!(matches!(result, Err(VerifyError::Io(_))));
    }
}
