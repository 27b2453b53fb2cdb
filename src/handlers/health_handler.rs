use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let credential = if state.generation_service.has_credential() {
        "configured"
    } else {
        "missing"
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": {
            "name": state.config.model_name,
            "credential": credential
        }
    }))
}
