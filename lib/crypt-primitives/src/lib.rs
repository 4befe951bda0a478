///
/// crypt-primitives - Cryptographic Operations
///
/// Thin adapters over vetted primitives, each with a raw variant and a
/// token variant encoded by `crypt_encoding::encode`:
///
/// - **Hashing**: SHA-256
/// - **HMAC**: HMAC-SHA256 keyed hashing
/// - **Compare**: constant-time equality for secrets
/// - **Random**: bytes from the operating system CSPRNG
///
/// Everything here is a pure function of its inputs, apart from the OS
/// random source, and is safe to call from any thread.
///

pub mod compare;
pub mod errors;
pub mod hash;
pub mod hmac_mod;
pub mod random;

pub use compare::hash_equals;
pub use errors::CryptError;
pub use hash::{hash_base64, sha256};
pub use hmac_mod::{hmac_base64, hmac_sha256};
pub use random::{DEFAULT_RANDOM_BYTES, random_bytes, random_bytes_base64, random_bytes_from};
