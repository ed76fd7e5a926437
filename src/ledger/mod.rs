pub mod block;
pub mod hashing;
pub mod model;
pub mod pow;

pub use block::{Block, PreviousHash};
pub use model::Ledger;

/// Number of leading hex zeros a proof hash must carry to be admitted.
pub const DIFFICULTY: usize = 6;

/// Proof recorded on the genesis block (bootstrap value, never mined).
pub const GENESIS_PROOF: u64 = 100;

/// `previous_hash` sentinel on the genesis block. Kept as a JSON
/// integer, not a digest string, so it can never collide with a real
/// block hash.
pub const GENESIS_PREVIOUS_HASH: u64 = 1;
