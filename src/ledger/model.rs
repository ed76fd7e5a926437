use log::debug;

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, PreviousHash, hashing};
use crate::transaction::Transaction;

/// Owner of the chain and the pending-transaction pool. The only
/// write path to either; callers hold it behind a single lock so the
/// pool-clear-and-append in [`Ledger::new_block`] stays atomic with
/// respect to concurrent [`Ledger::new_transaction`] calls.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
}

impl Ledger {
    /// Build a ledger and immediately seal the genesis block, so the
    /// chain is never observably empty.
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.new_block(GENESIS_PROOF, PreviousHash::Sentinel(GENESIS_PREVIOUS_HASH));
        ledger
    }

    /// Queue a transaction for the next sealed block. Returns the
    /// index of the block that will contain it (the next one, i.e.
    /// current chain length + 1). No hashing, no validation; field
    /// checks belong to the boundary layer.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: f64,
    ) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.chain.len() as u64 + 1
    }

    /// Seal a new block carrying the whole pending pool in FIFO order,
    /// the supplied proof and the supplied previous hash, then clear
    /// the pool and append. Sealing is unconditional: the proof is
    /// recorded as given, never re-verified here. Admission control
    /// must run strictly before this call.
    pub fn new_block(&mut self, proof: u64, previous_hash: PreviousHash) -> &Block {
        let block = Block::seal(
            self.chain.len() as u64 + 1,
            std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        );
        debug!(
            "sealed block #{} with {} tx(s)",
            block.index,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// The most recently sealed block. Genesis is sealed in the
    /// constructor, so the chain always has at least one element.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Digest of a block's canonical representation. Thin pass-through
    /// to the hashing module, kept here for caller convenience.
    pub fn hash(block: &Block) -> String {
        hashing::digest(block)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
