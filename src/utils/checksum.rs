//! Conversion between the storage service's transport encoding (base64 over the
//! raw digest bytes) and the lowercase hex form produced by the hasher.

use crate::error::VerifyError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Size of a raw SHA-256 digest.
pub const SHA256_DIGEST_LEN: usize = 32;

/// Decodes a base64 transport checksum into lowercase hex.
///
/// The input is decoded exactly as received and must hold a full SHA-256 digest.
pub fn decode_transport_checksum(encoded: &str) -> Result<String, VerifyError> {
    let raw = STANDARD.decode(encoded)?;
    if raw.len() != SHA256_DIGEST_LEN {
        return Err(VerifyError::Decode(format!(
            "checksum is {} bytes, expected {}",
            raw.len(),
            SHA256_DIGEST_LEN
        )));
    }
    Ok(hex::encode(raw))
}

pub fn encode_transport_checksum(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hash::calculate_hash;

    const HELLO_WORLD_B64: &str = "uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek=";

    #[test]
    fn test_decode_known_digest() {
        // SHA-256("hello world") as S3 reports it
        let decoded = decode_transport_checksum(HELLO_WORLD_B64).unwrap();
        assert_eq!(
            decoded,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(decoded, calculate_hash(b"hello world"));
    }

    #[test]
    fn test_decode_matches_hex_of_input() {
        let samples: [[u8; SHA256_DIGEST_LEN]; 3] = [[0u8; 32], [0xffu8; 32], [7u8; 32]];
        for raw in samples {
            let encoded = encode_transport_checksum(&raw);
            assert_eq!(decode_transport_checksum(&encoded).unwrap(), hex::encode(raw));
        }
    }

    #[test]
    fn test_decode_rejects_non_alphabet_characters() {
        let result = decode_transport_checksum("not*valid*base64!");
        assert!(matches!(result, Err(VerifyError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        let result = decode_transport_checksum("uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek");
        assert!(matches!(result, Err(VerifyError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_surrounding_whitespace() {
        for encoded in [
            format!(" {}", HELLO_WORLD_B64),
            format!("{}\n", HELLO_WORLD_B64),
        ] {
            let result = decode_transport_checksum(&encoded);
            assert!(matches!(result, Err(VerifyError::Decode(_))), "{:?}", encoded);
        }
    }

    #[test]
    fn test_decode_rejects_wrong_digest_length() {
        // Valid base64 of the wrong size: truncated, oversized, CRC32-sized, empty.
        for raw in [&[1u8; 31][..], &[1u8; 33][..], &[0xde, 0xad, 0xbe, 0xef][..], &[][..]] {
            let result = decode_transport_checksum(&encode_transport_checksum(raw));
            match result {
                Err(VerifyError::Decode(message)) => assert!(message.contains("expected 32")),
                other => panic!("Expected decode error for {} bytes, got {:?}", raw.len(), other),
            }
        }
    }
}
