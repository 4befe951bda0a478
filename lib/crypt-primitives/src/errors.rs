///
/// Error types for the cryptographic operations.
///
/// Hashing, HMAC and comparison cannot fail; only random generation can,
/// when the source fails or the buffer cannot be allocated.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("Cannot allocate random buffer: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}
