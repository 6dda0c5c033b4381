//! Deterministic short identifier derivation.
//!
//! Identifiers are derived from the destination URL itself, so the same
//! destination always maps to the same identifier and no external state or
//! randomness is involved.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept for the identifier (160 bits).
const DIGEST_BYTES: usize = 20;

/// Length of every derived identifier in characters.
///
/// 20 bytes encoded as URL-safe base64 without padding.
pub const ID_LENGTH: usize = 27;

/// Derives a fixed-length identifier from a destination string.
///
/// Hashes the raw bytes of `destination` with SHA-256, keeps the first
/// 160 bits and encodes them as URL-safe base64 without padding. The result
/// only contains `[A-Za-z0-9_-]`, so it is safe in URL paths, JSON and as a
/// storage key.
///
/// The input is not checked for well-formedness; any string is accepted.
///
/// # Examples
///
/// ```
/// use smallurl::utils::id_generator::{derive_id, ID_LENGTH};
///
/// let id = derive_id("https://example.com/a");
/// assert_eq!(id.len(), ID_LENGTH);
/// assert_eq!(id, derive_id("https://example.com/a"));
/// ```
pub fn derive_id(destination: &str) -> String {
    let digest = Sha256::digest(destination.as_bytes());

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..DIGEST_BYTES])
}
