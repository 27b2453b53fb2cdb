use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>, // multiple-choice only, four expected
    pub answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    OpenEnded,
    MultipleChoice,
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::OpenEnded,
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::OpenEnded => "open-ended",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalse => "true-false",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Question {
    pub fn new(question_type: QuestionType, question: &str, answer: &str) -> Self {
        Question {
            question_type,
            question: question.to_string(),
            options: None,
            answer: answer.to_string(),
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    /// Reads one element of a model reply without rejecting it.
    ///
    /// Missing text becomes empty, unknown or missing types read as
    /// open-ended, non-string answers keep their JSON text and options that
    /// are not an array are dropped.
    pub fn from_loose_json(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Question::new(QuestionType::OpenEnded, &value_text(value), "");
        };

        let question_type = fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(QuestionType::from_wire)
            .unwrap_or(QuestionType::OpenEnded);

        let options = fields
            .get("options")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(value_text).collect());

        Question {
            question_type,
            question: fields.get("question").map(value_text).unwrap_or_default(),
            options,
            answer: fields.get("answer").map(value_text).unwrap_or_default(),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Letter shown in front of an option: A, B, C, ... then 27, 28, ...
pub fn option_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}
