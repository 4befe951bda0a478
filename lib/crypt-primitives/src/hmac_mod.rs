///
/// crypt::hmac - HMAC-SHA256
///
/// - `hmac_sha256(key, data) -> [u8; 32]` - raw tag
/// - `hmac_base64(data, key) -> string` - tag as a URL-safe token
///
/// Keys of any length are accepted: longer than the block size they are
/// hashed first, shorter ones are zero padded, as HMAC prescribes.
///

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// HMAC-SHA256 of `data` under `key`, encoded as an unpadded URL-safe token.
///
/// Arguments follow the command order: data first, key second.
pub fn hmac_base64(data: &[u8], key: &[u8]) -> String {
    crypt_encoding::encode(&hmac_sha256(key, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_known_vector() {
        assert_eq!(
            hmac_base64(b"The quick brown fox jumps over the lazy dog", b"key"),
            "97yD9DBThCSxMpjmqm-xQ-9NWaFJRhdZl0edvC0aPNg"
        );
        let tag = hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(tag[..4], [0xf7, 0xbc, 0x83, 0xf4]);
    }

    #[test]
    fn test_hmac_empty_key_and_data() {
        assert_eq!(
            hmac_base64(b"", b""),
            "thNnmggU2ex3L5XXeMNfxf8Wl8STcVZTxscSFEKSxa0"
        );
    }

    #[test]
    fn test_hmac_long_key() {
        let key = [b'k'; 100];
        assert_eq!(
            hmac_base64(b"data", &key),
            "CTgO5LgC2iNjvJbo4NEzuidUWOqN28Vk-Yb8ErMfjLE"
        );
    }

    #[test]
    fn test_hmac_argument_order() {
        assert_eq!(
            hmac_base64(b"message", b"secret"),
            "i19IcCmVwVmMVz2x4hhmqbgl1KeU0WnXBgoDYFeWNgs"
        );
        assert_ne!(hmac_base64(b"message", b"secret"), hmac_base64(b"secret", b"message"));
    }

    #[test]
    fn test_hmac_deterministic() {
        assert_eq!(hmac_base64(b"data", b"key"), hmac_base64(b"data", b"key"));
        assert_ne!(hmac_base64(b"data", b"key"), hmac_base64(b"data", b"key2"));
    }
}
