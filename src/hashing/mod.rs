//! BLAKE3 fingerprints for comparison records.
//!
//! The fingerprint covers the canonical JSON encoding of a description, so two requests with
//! identical descriptions share a fingerprint regardless of how the input file was formatted.

use crate::model::WatchDescription;


/// Hex-encoded BLAKE3 hash of `bytes`.
#[inline]
pub fn fingerprint(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Fingerprint of a description's JSON encoding.
pub fn hash_description(description: &WatchDescription) -> Result<String, serde_json::Error> {
    let encoded = serde_json::to_vec(description)?;
    Ok(fingerprint(&encoded))
}
