use crate::{
    constants::prompts::{
        ENGLISH_TRUE_FALSE_RULE, QUESTION_FORMAT_INSTRUCTIONS, SINGLE_QUESTION_FORMAT_NOTE,
        TURKISH_TRUE_FALSE_RULE,
    },
    models::domain::{GenerationRequest, Language, QuestionType},
};

/// Builds the instruction sent to the model. Same input, same string.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "Generate exam questions for the following specifications:\nSubject: {}\nTopics: {}\nDifficulty: {}\nLanguage: {}\n\n",
        request.subject,
        request.topics.join(", "),
        request.difficulty.as_str(),
        request.language.display_name(),
    );

    match request.regeneration {
        Some(target) => {
            prompt.push_str(&format!(
                "Please generate exactly one {} question{}.\n\n",
                target.question_type,
                option_hint(target.question_type)
            ));
            prompt.push_str(QUESTION_FORMAT_INSTRUCTIONS);
            prompt.push('\n');
            prompt.push_str(SINGLE_QUESTION_FORMAT_NOTE);
        }
        None => {
            prompt.push_str("Please generate:\n");
            for question_type in QuestionType::ALL {
                prompt.push_str(&format!(
                    "- {} {} questions{}\n",
                    request.question_counts.get(question_type),
                    question_type,
                    option_hint(question_type)
                ));
            }
            prompt.push('\n');
            prompt.push_str(QUESTION_FORMAT_INSTRUCTIONS);
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(&language_directive(request.language));
    prompt
}

fn option_hint(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::MultipleChoice => " (with 4 options each)",
        _ => "",
    }
}

fn language_directive(language: Language) -> String {
    let rule = match language {
        Language::En => ENGLISH_TRUE_FALSE_RULE,
        Language::Tr => TURKISH_TRUE_FALSE_RULE,
    };
    format!(
        "IMPORTANT: Make sure all questions and answers are in {}. {}",
        language.display_name(),
        rule
    )
}
