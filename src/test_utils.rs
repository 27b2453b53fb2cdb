use crate::models::{
    domain::{Language, Question, QuestionCounts, QuestionType},
    dto::GenerateQuestionsRequest,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// One question of each type, multiple-choice first.
    pub fn mixed_questions() -> Vec<Question> {
        vec![
            Question::new(
                QuestionType::MultipleChoice,
                "What is the capital of France?",
                "Paris",
            )
            .with_options(&["Berlin", "Paris", "Rome", "Madrid"]),
            Question::new(QuestionType::TrueFalse, "The Nile is in Africa.", "True"),
            Question::new(
                QuestionType::OpenEnded,
                "Describe the water cycle.",
                "Evaporation, condensation, precipitation.",
            ),
        ]
    }

    /// A valid full-generation request body.
    pub fn generate_request(language: Language) -> GenerateQuestionsRequest {
        GenerateQuestionsRequest {
            subject: "Geography".to_string(),
            topics: vec!["Capitals".to_string(), "Rivers".to_string()],
            difficulty: Default::default(),
            language,
            question_counts: QuestionCounts::new(1, 1, 1),
            regenerate_index: None,
            regenerate_question_type: None,
        }
    }

    /// Model reply text in the fenced form providers tend to send.
    pub fn fenced_reply(questions: &[Question]) -> String {
        format!(
            "```json\n{}\n```",
            serde_json::to_string(questions).expect("questions serialize")
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents a server error (5xx)
    pub fn assert_server_error(status: StatusCode) {
        assert!(
            status.is_server_error(),
            "Expected server error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_mixed_questions() {
        let questions = mixed_questions();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].options.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_fixtures_fenced_reply_round_trips_through_parser() {
        let reply = fenced_reply(&mixed_questions());
        let parsed = crate::services::response_parser::parse_questions(Some(&reply)).unwrap();
        assert_eq!(parsed, mixed_questions());
    }
}
