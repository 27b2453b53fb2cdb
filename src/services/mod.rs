pub mod export_service;
pub mod generation_service;
pub mod model_client;
pub mod output_validator;
pub mod prompt_builder;
pub mod response_parser;

pub use generation_service::GenerationService;
pub use model_client::{ModelClient, OpenAiModelClient};
