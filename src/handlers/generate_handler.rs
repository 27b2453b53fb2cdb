use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::GenerationRequest,
        dto::{GenerateQuestionsRequest, GenerateQuestionsResponse},
    },
};

#[post("/api/generate")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = GenerationRequest::try_from(request.into_inner())?;

    let questions = state
        .generation_service
        .generate(&request)
        .await
        .inspect_err(|e| log::error!("Question generation failed [{}]: {}", e.error_code(), e))?;

    Ok(HttpResponse::Ok().json(GenerateQuestionsResponse { questions }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};

    use super::*;
    use crate::{
        config::Config,
        errors::{ErrorResponse, UpstreamFailure},
        handlers::json_config,
        models::domain::Language,
        services::model_client::MockModelClient,
        test_utils::{
            fixtures::{fenced_reply, generate_request, mixed_questions},
            test_helpers::{assert_server_error, assert_success_status},
        },
    };

    fn state_with(client: MockModelClient) -> web::Data<AppState> {
        web::Data::new(AppState::with_model_client(
            Config::test_config(),
            Arc::new(client),
        ))
    }

    #[actix_web::test]
    async fn test_generate_returns_questions() {
        let mut client = MockModelClient::new();
        client.expect_has_credential().return_const(true);
        client
            .expect_complete()
            .returning(|_| Ok(Some(fenced_reply(&mixed_questions()))));
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(generate_request(Language::En))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: GenerateQuestionsResponse = test::read_body_json(resp).await;
        assert_eq!(body.questions, mixed_questions());
    }

    #[actix_web::test]
    async fn test_generate_without_credential_hides_token_and_skips_call() {
        let mut client = MockModelClient::new();
        client.expect_has_credential().return_const(false);
        client.expect_complete().times(0);
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(generate_request(Language::En))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_server_error(resp.status());

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, AppError::AuthenticationError.to_string());
        assert!(!body.error.contains("test-model-token"));
    }

    #[actix_web::test]
    async fn test_generate_maps_upstream_failures_to_messages() {
        let mut client = MockModelClient::new();
        client.expect_has_credential().return_const(true);
        client
            .expect_complete()
            .returning(|_| Err(AppError::UpstreamError(UpstreamFailure::Timeout)));
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(generate_request(Language::Tr))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_server_error(resp.status());

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, UpstreamFailure::Timeout.to_string());
    }

    #[actix_web::test]
    async fn test_generate_rejects_zero_counts() {
        let mut client = MockModelClient::new();
        client.expect_has_credential().return_const(true);
        client.expect_complete().times(0);
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .service(generate_questions),
        )
        .await;

        let mut body = generate_request(Language::En);
        body.question_counts = Default::default();
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_gets_json_error() {
        let client = MockModelClient::new();
        let app = test::init_service(
            App::new()
                .app_data(state_with(client))
                .app_data(json_config())
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"subject\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Validation error"));
    }
}
