///
/// crypt::random - Secure Random Bytes
///
/// Bytes come from the operating system CSPRNG via `rand::rngs::OsRng`.
/// A failing source is reported as `CryptError::RandomSource`; there is no
/// fallback to a non-cryptographic generator. A count the host cannot
/// allocate is reported as `CryptError::Allocation`.
///
/// - `random_bytes(n) -> bytes throws CryptError`
/// - `random_bytes_base64(n) -> string throws CryptError`
///

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::errors::CryptError;

/// Byte count used when the caller does not ask for one.
pub const DEFAULT_RANDOM_BYTES: usize = 32;

/// Fill `count` bytes from `rng`, propagating any source failure.
pub fn random_bytes_from<R>(rng: &mut R, count: usize) -> Result<Vec<u8>, CryptError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)?;
    buf.resize(count, 0);
    if count > 0 {
        rng.try_fill_bytes(&mut buf)?;
    }
    Ok(buf)
}

pub fn random_bytes(count: usize) -> Result<Vec<u8>, CryptError> {
    random_bytes_from(&mut OsRng, count)
}

/// `count` secure random bytes encoded as an unpadded URL-safe token.
///
/// The token is `crypt_encoding::encoded_len(count)` characters long.
pub fn random_bytes_base64(count: usize) -> Result<String, CryptError> {
    let bytes = random_bytes(count)?;
    Ok(crypt_encoding::encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ExhaustedRng;

    impl RngCore for ExhaustedRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other("entropy source exhausted")))
        }
    }

    impl CryptoRng for ExhaustedRng {}

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(32).unwrap().len(), 32);
        assert_eq!(random_bytes(1).unwrap().len(), 1);
    }

    #[test]
    fn test_random_bytes_zero() {
        assert!(random_bytes(0).unwrap().is_empty());
        assert_eq!(random_bytes_base64(0).unwrap(), "");
    }

    #[test]
    fn test_random_bytes_unique() {
        let r1 = random_bytes(32).unwrap();
        let r2 = random_bytes(32).unwrap();
        assert_ne!(r1, r2);
    }

    #[test]
    fn test_random_token_alphabet_and_length() {
        for count in [1, 2, 3, 16, DEFAULT_RANDOM_BYTES, 100] {
            let token = random_bytes_base64(count).unwrap();
            assert_eq!(token.len(), crypt_encoding::encoded_len(count));
            assert!(
                token
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
                "unexpected character in {}",
                token
            );
        }
        assert!(random_bytes_base64(DEFAULT_RANDOM_BYTES).unwrap().len() <= 43);
    }

    #[test]
    fn test_random_token_decodes_to_count_bytes() {
        let token = random_bytes_base64(24).unwrap();
        assert_eq!(crypt_encoding::decode(&token).unwrap().len(), 24);
    }

    #[test]
    fn test_exhausted_source_is_an_error() {
        let err = random_bytes_from(&mut ExhaustedRng, 32).unwrap_err();
        assert!(matches!(err, CryptError::RandomSource(_)));
        assert!(err.to_string().contains("entropy source exhausted"));
    }

    #[test]
    fn test_unallocatable_count_is_an_error() {
        let err = random_bytes(usize::MAX).unwrap_err();
        assert!(matches!(err, CryptError::Allocation(_)));
        assert!(random_bytes_base64(usize::MAX).is_err());
    }

    #[test]
    fn test_exhausted_source_not_touched_for_zero_bytes() {
        assert!(random_bytes_from(&mut ExhaustedRng, 0).unwrap().is_empty());
    }
}
