use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Link to the preceding block: a hex digest for every sealed block
/// except genesis, which carries a fixed integer sentinel instead.
/// Untagged so it serializes as a bare JSON number or string, exactly
/// as it appears in the canonical block representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviousHash {
    Sentinel(u64),
    Digest(String),
}

/// An immutable record of a batch of transactions plus sealing
/// metadata. Created exactly once, at sealing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Seconds since the Unix epoch, at sealing time.
    pub timestamp: f64,
    pub transactions: Vec<Transaction>,
    /// The proof supplied by the miner. Recorded as-is; admission
    /// control happens before sealing, not here.
    pub proof: u64,
    pub previous_hash: PreviousHash,
}

impl Block {
    /// Seal a block from the given parts, stamped with the current time.
    pub fn seal(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: PreviousHash,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp_micros() as f64 / 1e6,
            transactions,
            proof,
            previous_hash,
        }
    }
}
