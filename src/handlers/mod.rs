pub mod export_handler;
pub mod generate_handler;
pub mod health_handler;

use actix_web::web;

use crate::errors::AppError;

pub use export_handler::{export_answers, export_questions};
pub use generate_handler::generate_questions;
pub use health_handler::health_check;

/// Rejects unreadable JSON bodies with the same `{ error }` shape as
/// every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(generate_questions)
        .service(export_questions)
        .service(export_answers);
}
