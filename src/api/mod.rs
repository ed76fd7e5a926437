mod chain;
mod health;
mod mine;
pub mod models;
mod tx;

use actix_web::web::ServiceConfig;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(tx::new_transaction)
        .service(mine::mine)
        .service(chain::full_chain)
        .service(chain::last_block);
}
