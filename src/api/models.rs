use crate::ledger::{Block, Ledger};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

/// Shared application state: the ledger behind a single mutex plus the
/// node's process-wide identifier. One lock covers both chain and pool
/// so sealing stays atomic against concurrent transaction submissions.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub node_id: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            node_id: Uuid::new_v4().simple().to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------- Transaction API Models ---------- */

/// All fields optional so presence can be checked explicitly and
/// answered with the protocol's "missing values" message instead of a
/// deserializer error.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct MineRequest {
    pub proof: Option<u64>,
    /// Opaque caller-supplied value with no semantics here; echoed
    /// back untouched when present.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub new_block: Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct LastBlockResponse<'a> {
    pub last_block: &'a Block,
}
