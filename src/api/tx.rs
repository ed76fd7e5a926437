use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, MessageResponse, NewTxRequest};

/// Queue a transaction for the next block. The core performs no field
/// validation, so presence of all three fields is enforced here.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let NewTxRequest {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let (Some(sender), Some(recipient), Some(amount)) = (sender, recipient, amount) else {
        warn!("POST /transactions/new - rejected: missing values");
        return HttpResponse::BadRequest().json(MessageResponse {
            message: "missing values".into(),
        });
    };

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(sender, recipient, amount)
    };

    info!("POST /transactions/new - queued for block {index}");
    HttpResponse::Created().json(MessageResponse {
        message: format!("transaction will post to block {index}."),
    })
}
