use serde::{Deserialize, Serialize};

use crate::models::domain::question::QuestionType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Turkish",
        }
    }

    /// Literal a true-false answer must use for "true" in this language.
    pub fn true_literal(&self) -> &'static str {
        match self {
            Language::En => "True",
            Language::Tr => "Doğru",
        }
    }

    pub fn false_literal(&self) -> &'static str {
        match self {
            Language::En => "False",
            Language::Tr => "Yanlış",
        }
    }
}

/// Requested number of questions per type. Missing keys count as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionCounts {
    #[serde(rename = "open-ended", default)]
    pub open_ended: u32,
    #[serde(rename = "multiple-choice", default)]
    pub multiple_choice: u32,
    #[serde(rename = "true-false", default)]
    pub true_false: u32,
}

impl QuestionCounts {
    pub fn new(open_ended: u32, multiple_choice: u32, true_false: u32) -> Self {
        Self {
            open_ended,
            multiple_choice,
            true_false,
        }
    }

    pub fn get(&self, question_type: QuestionType) -> u32 {
        match question_type {
            QuestionType::OpenEnded => self.open_ended,
            QuestionType::MultipleChoice => self.multiple_choice,
            QuestionType::TrueFalse => self.true_false,
        }
    }

    pub fn total(&self) -> u32 {
        self.open_ended
            .saturating_add(self.multiple_choice)
            .saturating_add(self.true_false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegenerationTarget {
    pub index: usize,
    pub question_type: QuestionType,
}

/// A validated request for either a full batch or a single replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub subject: String,
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    pub language: Language,
    pub question_counts: QuestionCounts,
    pub regeneration: Option<RegenerationTarget>,
}

impl GenerationRequest {
    pub fn is_regeneration(&self) -> bool {
        self.regeneration.is_some()
    }

    /// Number of questions a faithful reply contains.
    pub fn expected_len(&self) -> usize {
        match self.regeneration {
            Some(_) => 1,
            None => self.question_counts.total() as usize,
        }
    }
}
