use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::prompts::SYSTEM_PROMPT,
    errors::{AppError, AppResult, UpstreamFailure},
};

pub const TEMPERATURE: f32 = 1.0;
pub const TOP_P: f32 = 1.0;
pub const MAX_TOKENS: u32 = 4096;

// Status codes only count as whole numbers, never as digits inside a larger one.
static RATE_LIMIT_STATUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b429\b").expect("RATE_LIMIT_STATUS is a valid regex pattern"));
static AUTH_STATUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b40[13]\b").expect("AUTH_STATUS is a valid regex pattern"));

/// One chat-completion round trip to the model provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Whether a provider credential is configured.
    fn has_credential(&self) -> bool;

    /// Sends `prompt` as the single user message. `Ok(None)` means the
    /// provider answered without a choice or without message content.
    async fn complete(&self, prompt: &str) -> AppResult<Option<String>>;
}

pub struct OpenAiModelClient {
    client: Option<Client<OpenAIConfig>>,
    model_name: String,
    timeout: Duration,
}

impl OpenAiModelClient {
    pub fn new(config: &Config) -> Self {
        let client = config.model_token.as_ref().map(|token| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(token.expose_secret())
                .with_api_base(&config.model_base_url);
            // A zero elapsed-time budget makes the first transient error final.
            let single_attempt = backoff::ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(Duration::ZERO))
                .build();
            Client::with_config(openai_config).with_backoff(single_attempt)
        });

        Self {
            client,
            model_name: config.model_name.clone(),
            timeout: Duration::from_secs(config.model_timeout_secs),
        }
    }

    fn messages(&self, prompt: &str) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_PROMPT)
            .build()?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        Ok(vec![
            ChatCompletionRequestMessage::System(system),
            ChatCompletionRequestMessage::User(user),
        ])
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    async fn complete(&self, prompt: &str) -> AppResult<Option<String>> {
        let client = self.client.as_ref().ok_or(AppError::AuthenticationError)?;

        #[allow(deprecated)]
        let request = self
            .messages(prompt)
            .and_then(|messages| {
                CreateChatCompletionRequestArgs::default()
                    .model(&self.model_name)
                    .messages(messages)
                    .temperature(TEMPERATURE)
                    .top_p(TOP_P)
                    .max_tokens(MAX_TOKENS)
                    .build()
            })
            .map_err(|e| {
                log::error!("Failed to build chat completion request: {}", e);
                AppError::UpstreamError(UpstreamFailure::Generic)
            })?;

        log::debug!(
            "Calling model {} with a {} character prompt",
            self.model_name,
            prompt.len()
        );

        let response = tokio::time::timeout(self.timeout, client.chat().create(request))
            .await
            .map_err(|_| {
                log::warn!("Model call exceeded {:?}", self.timeout);
                AppError::UpstreamError(UpstreamFailure::Timeout)
            })?
            .map_err(|e| {
                let failure = classify_error(&e);
                log::error!("Model call failed ({:?}): {}", failure, e);
                AppError::UpstreamError(failure)
            })?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

fn classify_error(err: &OpenAIError) -> UpstreamFailure {
    match err {
        OpenAIError::ApiError(api) => classify_failure(api.code.as_deref(), &api.message),
        other => classify_failure(None, &other.to_string()),
    }
}

/// Maps a provider error code and message onto a failure category.
pub fn classify_failure(code: Option<&str>, message: &str) -> UpstreamFailure {
    let code = code.unwrap_or_default().to_ascii_lowercase();
    let message = message.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|n| code.contains(n) || message.contains(n));
    let status = |pattern: &Regex| pattern.is_match(&code) || pattern.is_match(&message);

    if status(&RATE_LIMIT_STATUS)
        || mentions(&["rate_limit", "rate limit", "ratelimit", "too many requests"])
    {
        UpstreamFailure::RateLimit
    } else if status(&AUTH_STATUS)
        || mentions(&[
            "invalid_api_key",
            "unauthorized",
            "forbidden",
            "authentication",
            "bad credentials",
            "invalid api key",
        ])
    {
        UpstreamFailure::AuthFailure
    } else if mentions(&["timeout", "timed out", "deadline"]) {
        UpstreamFailure::Timeout
    } else {
        UpstreamFailure::Generic
    }
}
