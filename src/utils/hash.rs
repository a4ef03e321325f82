//! Content hashing built on `blake3`.

/// 64-bit content hash, used for cheap change detection.
pub fn compute(bytes: &[u8]) -> u64 {
    let hash = blake3::hash(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Short hex fingerprint (16 chars) of some content.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(&blake3::hash(bytes).as_bytes()[..8])
}
