use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, Question},
    services::{
        model_client::ModelClient, output_validator::validate_questions,
        prompt_builder::build_prompt, response_parser::parse_questions,
    },
};

pub struct GenerationService {
    model_client: Arc<dyn ModelClient>,
    strict_validation: bool,
}

impl GenerationService {
    pub fn new(model_client: Arc<dyn ModelClient>, strict_validation: bool) -> Self {
        Self {
            model_client,
            strict_validation,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.model_client.has_credential()
    }

    /// Runs one generation round trip. For a regeneration request the
    /// caller splices the first returned question in at the target index.
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<Vec<Question>> {
        if !self.model_client.has_credential() {
            log::error!("Rejecting generation request: no model credential configured");
            return Err(AppError::AuthenticationError);
        }

        let prompt = build_prompt(request);
        match request.regeneration {
            Some(target) => log::info!(
                "Regenerating {} question at index {} for subject '{}'",
                target.question_type,
                target.index,
                request.subject
            ),
            None => log::info!(
                "Generating {} questions for subject '{}'",
                request.question_counts.total(),
                request.subject
            ),
        }

        let content = self
            .model_client
            .complete(&prompt)
            .await?
            .ok_or_else(|| {
                log::warn!("Model response carried no content");
                AppError::EmptyResponse
            })?;

        let questions = parse_questions(Some(&content))?;

        if self.strict_validation {
            validate_questions(request, &questions)?;
        } else if questions.len() != request.expected_len() {
            log::warn!(
                "Model returned {} questions, {} were requested",
                questions.len(),
                request.expected_len()
            );
        }

        Ok(questions)
    }
}
