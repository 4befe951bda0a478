///
/// Base64Url token transform
///
/// Tokens are RFC 4648 §4 base64 with two alphabet substitutions
/// (`+` -> `-`, `/` -> `_`) and with all trailing `=` padding removed.
/// Padding is never emitted, whatever the input length, so a token is
/// always `ceil(4 * n / 3)` characters long for `n` input bytes.
///
/// - encode(data: bytes) -> string
/// - decode(token: string) -> bytes throws DecodeError
///

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid character {byte:?} at offset {offset}")]
    InvalidByte { offset: usize, byte: char },

    #[error("Invalid token length {0}")]
    InvalidLength(usize),

    #[error("Invalid trailing bits in last symbol at offset {0}")]
    InvalidLastSymbol(usize),
}

/// Encode bytes as an unpadded URL-safe token.
pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Length of the token `encode` produces for `byte_len` input bytes.
pub fn encoded_len(byte_len: usize) -> usize {
    let tail = match byte_len % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    byte_len / 3 * 4 + tail
}

/// Decode a token produced by `encode`.
///
/// Trailing `=` is tolerated so padded base64url from other tools decodes
/// too; the standard `+` and `/` characters are rejected.
pub fn decode(token: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = token.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .map_err(|e| match e {
            base64::DecodeError::InvalidByte(offset, byte) => DecodeError::InvalidByte {
                offset,
                byte: byte as char,
            },
            base64::DecodeError::InvalidLastSymbol(offset, _) => {
                DecodeError::InvalidLastSymbol(offset)
            }
            base64::DecodeError::InvalidLength(len) => DecodeError::InvalidLength(len),
            base64::DecodeError::InvalidPadding => match trimmed.find('=') {
                Some(offset) => DecodeError::InvalidByte { offset, byte: '=' },
                None => DecodeError::InvalidLength(trimmed.len()),
            },
        })
}
