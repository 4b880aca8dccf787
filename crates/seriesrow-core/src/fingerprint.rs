//! Tag set fingerprinting
//!
//! A fingerprint is a 64-bit FNV-1a hash over the tag set in canonical order:
//! keys sorted byte-wise ascending, and for each key its bytes followed by its
//! value's bytes. No separators are written, so the fingerprint is a fast
//! grouping proxy and not an exact equality test.

use crate::types::Tags;
use fnv::FnvHasher;
use std::hash::Hasher;

/// 64-bit hash summarizing a tag set
pub type TagFingerprint = u64;

/// Fingerprint of a tag set with no entries (FNV-1a offset basis)
pub const EMPTY_TAGS_FINGERPRINT: TagFingerprint = 0xcbf2_9ce4_8422_2325;

/// Compute the canonical fingerprint of a tag set
pub fn tags_fingerprint(tags: &Tags) -> TagFingerprint {
    let mut hasher = FnvHasher::default();
    for key in sorted_tag_keys(tags) {
        hasher.write(key.as_bytes());
        hasher.write(tags[key].as_bytes());
    }
    hasher.finish()
}

/// Tag keys in byte-wise ascending order
pub fn sorted_tag_keys(tags: &Tags) -> Vec<&str> {
    let mut keys: Vec<&str> = tags.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
