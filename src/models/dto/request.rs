use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::{
    Difficulty, GenerationRequest, Language, Question, QuestionCounts, QuestionType,
    RegenerationTarget,
};

// The subject ends up in download file names and response headers.
static NO_CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\p{Cc}]*$").expect("NO_CONTROL_CHARS is a valid regex pattern")
});

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[validate(
        length(min = 1, max = 200),
        regex(path = *NO_CONTROL_CHARS, message = "Subject must not contain control characters")
    )]
    pub subject: String,

    #[validate(length(min = 1, message = "At least one topic is required"))]
    pub topics: Vec<String>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub question_counts: QuestionCounts,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regenerate_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regenerate_question_type: Option<QuestionType>,
}

impl TryFrom<GenerateQuestionsRequest> for GenerationRequest {
    type Error = AppError;

    fn try_from(dto: GenerateQuestionsRequest) -> Result<Self, Self::Error> {
        dto.validate()?;

        let subject = dto.subject.trim().to_string();
        if subject.is_empty() {
            return Err(AppError::ValidationError("subject must not be blank".into()));
        }

        let topics: Vec<String> = dto
            .topics
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if topics.is_empty() {
            return Err(AppError::ValidationError(
                "topics must contain at least one non-blank entry".into(),
            ));
        }

        let regeneration = match (dto.regenerate_index, dto.regenerate_question_type) {
            (Some(index), Some(question_type)) => Some(RegenerationTarget {
                index,
                question_type,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::ValidationError(
                    "regenerateIndex and regenerateQuestionType must be sent together".into(),
                ))
            }
        };

        if regeneration.is_none() && dto.question_counts.total() == 0 {
            return Err(AppError::ValidationError(
                "at least one question must be requested".into(),
            ));
        }

        Ok(GenerationRequest {
            subject,
            topics,
            difficulty: dto.difficulty,
            language: dto.language,
            question_counts: dto.question_counts,
            regeneration,
        })
    }
}

/// Body of the export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExportRequest {
    #[validate(
        length(min = 1, max = 200),
        regex(path = *NO_CONTROL_CHARS, message = "Subject must not contain control characters")
    )]
    pub subject: String,

    #[serde(default)]
    pub language: Language,

    #[validate(length(min = 1, message = "Nothing to export"))]
    pub questions: Vec<Question>,
}
