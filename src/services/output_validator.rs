use crate::{
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, Question, QuestionType},
};

pub const MULTIPLE_CHOICE_OPTION_COUNT: usize = 4;

/// Checks model output against the request: total length, per-type
/// distribution, option counts and true-false literals.
pub fn validate_questions(request: &GenerationRequest, questions: &[Question]) -> AppResult<()> {
    if questions.len() != request.expected_len() {
        return Err(AppError::InvalidModelOutput(format!(
            "expected {} questions, received {}",
            request.expected_len(),
            questions.len()
        )));
    }

    match request.regeneration {
        Some(target) => {
            if questions[0].question_type != target.question_type {
                return Err(AppError::InvalidModelOutput(format!(
                    "expected a {} question, received {}",
                    target.question_type, questions[0].question_type
                )));
            }
        }
        None => {
            for question_type in QuestionType::ALL {
                let expected = request.question_counts.get(question_type) as usize;
                let received = questions
                    .iter()
                    .filter(|q| q.question_type == question_type)
                    .count();
                if expected != received {
                    return Err(AppError::InvalidModelOutput(format!(
                        "expected {} {} questions, received {}",
                        expected, question_type, received
                    )));
                }
            }
        }
    }

    let (true_literal, false_literal) = (
        request.language.true_literal(),
        request.language.false_literal(),
    );

    for (i, question) in questions.iter().enumerate() {
        match question.question_type {
            QuestionType::MultipleChoice => {
                let option_count = question.options.as_ref().map_or(0, Vec::len);
                if option_count != MULTIPLE_CHOICE_OPTION_COUNT {
                    return Err(AppError::InvalidModelOutput(format!(
                        "question {} has {} options instead of {}",
                        i + 1,
                        option_count,
                        MULTIPLE_CHOICE_OPTION_COUNT
                    )));
                }
            }
            QuestionType::TrueFalse => {
                let answer = question.answer.trim();
                if answer != true_literal && answer != false_literal {
                    return Err(AppError::InvalidModelOutput(format!(
                        "question {} must be answered with \"{}\" or \"{}\"",
                        i + 1,
                        true_literal,
                        false_literal
                    )));
                }
            }
            QuestionType::OpenEnded => {}
        }
    }

    Ok(())
}
