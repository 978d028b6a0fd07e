// File: crates/figure-core/src/id.rs
// Summary: Opaque identifier generation for model nodes and embeddings.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

// Monotonic per-process counter; keeps ids distinct even when two figures
// are created within the same nanosecond.
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed material for id generation: the creation instant plus whatever
/// partial figure state exists at call time.
#[derive(Clone, Copy, Debug)]
pub struct IdSeed<'a> {
    pub time_ns: i64,
    pub title: Option<&'a str>,
    pub width: u32,
    pub height: u32,
}

/// Generate an opaque, collision-resistant id for a model node.
pub fn generate(seed: &IdSeed<'_>, type_tag: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut hasher = Sha256::new();
    hasher.update(seed.time_ns.to_le_bytes());
    hasher.update(seed.width.to_le_bytes());
    hasher.update(seed.height.to_le_bytes());
    if let Some(title) = seed.title {
        hasher.update(title.as_bytes());
    }
    hasher.update(type_tag.as_bytes());
    hasher.update(n.to_le_bytes());
    let digest = hasher.finalize();
    // 16 bytes of digest is plenty for an opaque string key.
    let mut out = String::with_capacity(32);
    for byte in &digest[..16] {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

/// Unique per-embedding element id, distinct from the figure identity.
pub fn element_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
