use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse, LastBlockResponse};

/// Get the full chain and its length in one consistent snapshot.
#[get("/chain")]
pub async fn full_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        length: ledger.len(),
        chain: &ledger.chain,
    })
}

/// Get the most recently sealed block.
#[get("/last_block")]
pub async fn last_block(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(LastBlockResponse {
        last_block: ledger.last_block(),
    })
}
