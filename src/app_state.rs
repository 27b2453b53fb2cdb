use std::sync::Arc;

use crate::{
    config::Config,
    services::{GenerationService, ModelClient, OpenAiModelClient},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_client = Arc::new(OpenAiModelClient::new(&config));
        Self::with_model_client(config, model_client)
    }

    /// Builds the state around a caller-supplied model client.
    pub fn with_model_client(config: Config, model_client: Arc<dyn ModelClient>) -> Self {
        let generation_service = Arc::new(GenerationService::new(
            model_client,
            config.strict_validation,
        ));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}
