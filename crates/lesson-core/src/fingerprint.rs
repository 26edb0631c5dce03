use xxhash_rust::xxh3::xxh3_64;

use crate::list::BlockList;
use crate::model::Block;

/// Compute an xxh64-style hash (hex) over UTF-8 bytes.
///
/// Uses xxh3_64 (from `xxhash-rust`); returned as fixed-width 16-char lowercase hex.
pub fn xxh64_hex(input: &str) -> String {
    format!("{:016x}", xxh3_64(input.as_bytes()))
}

/// Content hash of one block.
///
/// Hashes the block's JSON with keys sorted and `collapsed` removed, so
/// expanding or collapsing a block never changes its hash.
pub fn block_hash(block: &Block) -> String {
    let mut value = match serde_json::to_value(block) {
        Ok(v) => v,
        Err(_) => return xxh64_hex(block.id().as_str()),
    };
    if let Some(obj) = value.as_object_mut() {
        obj.remove("collapsed");
    }
    // Key order is fixed for a given shape, so equal blocks hash equally.
    xxh64_hex(&value.to_string())
}

/// Fingerprint of a whole list, sensitive to order and content.
///
/// Computed over ordered lines: `{blockId}\t{type}\t{blockHash}\n`
pub fn fingerprint(list: &BlockList) -> String {
    let mut payload = String::new();
    for b in list {
        payload.push_str(b.id().as_str());
        payload.push('\t');
        payload.push_str(b.kind().as_str());
        payload.push('\t');
        payload.push_str(&block_hash(b));
        payload.push('\n');
    }
    xxh64_hex(&payload)
}
