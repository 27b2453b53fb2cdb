use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult, ErrorResponse},
    models::{
        domain::{GenerationRequest, Question},
        dto::{GenerateQuestionsRequest, GenerateQuestionsResponse},
    },
    services::GenerationService,
};

/// The generation endpoint as seen from the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn generate(&self, request: &GenerateQuestionsRequest) -> AppResult<Vec<Question>>;
}

/// Calls `POST /api/generate` on a running server.
pub struct HttpGenerationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn generate(&self, request: &GenerateQuestionsRequest) -> AppResult<Vec<Question>> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("server responded with {}", status),
            };
            return Err(AppError::RequestFailed(message));
        }

        let body: GenerateQuestionsResponse = response.json().await?;
        Ok(body.questions)
    }
}

/// Drives the service in-process, skipping the HTTP hop.
#[async_trait]
impl GenerationApi for GenerationService {
    async fn generate(&self, request: &GenerateQuestionsRequest) -> AppResult<Vec<Question>> {
        let request = GenerationRequest::try_from(request.clone())?;
        GenerationService::generate(self, &request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        models::domain::Language,
        services::model_client::MockModelClient,
        test_utils::fixtures::{fenced_reply, generate_request, mixed_questions},
    };

    #[test]
    fn http_api_builds_endpoint_from_base_url() {
        let api = HttpGenerationApi::new("http://localhost:8080/");
        assert_eq!(api.endpoint(), "http://localhost:8080/api/generate");
    }

    #[actix_web::test]
    async fn http_api_reports_unreachable_server() {
        let api = HttpGenerationApi::new("http://127.0.0.1:9");

        let result = api.generate(&generate_request(Language::En)).await;

        assert!(matches!(result, Err(AppError::RequestFailed(_))));
    }

    #[actix_web::test]
    async fn service_serves_as_in_process_api() {
        let mut client = MockModelClient::new();
        client.expect_has_credential().return_const(true);
        client
            .expect_complete()
            .returning(|_| Ok(Some(fenced_reply(&mixed_questions()))));
        let service = GenerationService::new(Arc::new(client), false);
        let api: &dyn GenerationApi = &service;

        let questions = api.generate(&generate_request(Language::En)).await.unwrap();

        assert_eq!(questions, mixed_questions());
    }
}
