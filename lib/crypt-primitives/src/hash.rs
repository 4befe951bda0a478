///
/// crypt::hash - SHA-256 hashing
///
/// - `sha256(data) -> [u8; 32]` - raw digest
/// - `hash_base64(data) -> string` - digest as a URL-safe token
///

use sha2::{Digest, Sha256};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 of `data`, encoded as an unpadded URL-safe token.
pub fn hash_base64(data: &[u8]) -> String {
    crypt_encoding::encode(&sha256(data))
}
