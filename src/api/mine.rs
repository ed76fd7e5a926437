use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, MessageResponse, MineRequest, MineResponse};
use crate::ledger::{Ledger, PreviousHash};

/// Seal a new block from the pending pool with a caller-supplied
/// proof. The proof must be present, but it is never checked against
/// the difficulty predicate here: the miner searches and submits, and
/// sealing records what was submitted. `previous_hash` is computed
/// from the current last block under the same lock, so no transaction
/// or block can slip in between.
#[post("/mine")]
pub async fn mine(state: web::Data<AppState>, body: web::Json<MineRequest>) -> impl Responder {
    let MineRequest { proof, id } = body.into_inner();

    let Some(proof) = proof else {
        warn!("POST /mine - rejected: no proof supplied");
        return HttpResponse::BadRequest().json(MessageResponse {
            message: "a proof value is required".into(),
        });
    };

    let sealed = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        let previous_hash = Ledger::hash(ledger.last_block());
        ledger.new_block(proof, PreviousHash::Digest(previous_hash)).clone()
    };

    info!(
        "POST /mine - node {} sealed block #{} ({} tx(s), proof={})",
        state.node_id,
        sealed.index,
        sealed.transactions.len(),
        proof
    );
    HttpResponse::Ok().json(MineResponse {
        new_block: sealed,
        id,
    })
}
