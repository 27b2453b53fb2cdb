pub const SYSTEM_PROMPT: &str = "";

pub const QUESTION_FORMAT_INSTRUCTIONS: &str = r#"Format the response as a JSON array of objects with the following structure:
{
  "type": "open-ended" | "multiple-choice" | "true-false",
  "question": "the question text",
  "options": ["option1", "option2", "option3", "option4"] (only for multiple-choice),
  "answer": "the correct answer"
}"#;

pub const SINGLE_QUESTION_FORMAT_NOTE: &str =
    "Return the JSON array with exactly one element.";

pub const ENGLISH_TRUE_FALSE_RULE: &str =
    r#"For true/false questions, use "True" or "False" as answers."#;

// Must not contain the English true/false literals.
pub const TURKISH_TRUE_FALSE_RULE: &str = r#"For true/false questions in Turkish, use "Doğru" for true answers and "Yanlış" for false answers. Never use the English words for true or false in Turkish questions."#;
