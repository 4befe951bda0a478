///
/// crypt-encoding - URL-safe token encoding
///
/// Every value the crypt commands print goes through the same transform:
/// standard base64 with `+` -> `-`, `/` -> `_` and the trailing `=` padding
/// dropped. Output is safe in URLs, file names and shell arguments.
///
/// - **encode**: raw bytes to an unpadded token (infallible)
/// - **decode**: token back to raw bytes
/// - **encoded_len**: exact token length for a given byte count
///

pub mod base64url;

pub use base64url::{DecodeError, decode, encode, encoded_len};
