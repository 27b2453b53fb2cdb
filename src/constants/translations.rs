use crate::models::domain::Language;

/// User-facing strings for the form and the exported documents.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub subject_required: &'static str,
    pub topics_required: &'static str,
    pub questions_required: &'static str,
    pub error: &'static str,
    pub answer: &'static str,
    pub true_label: &'static str,
    pub false_label: &'static str,
    pub subject_label: &'static str,
    pub answer_key: &'static str,
    pub questions_file_name: &'static str,
    pub answer_key_file_name: &'static str,
}

pub const EN: Translations = Translations {
    subject_required: "Please enter a subject",
    topics_required: "Please enter at least one topic",
    questions_required: "Please request at least one question",
    error: "An error occurred while generating questions. Please try again.",
    answer: "Answer",
    true_label: "True",
    false_label: "False",
    subject_label: "Subject",
    answer_key: "Answer Key",
    questions_file_name: "questions",
    answer_key_file_name: "answer-key",
};

pub const TR: Translations = Translations {
    subject_required: "Lütfen bir ders girin",
    topics_required: "Lütfen en az bir konu girin",
    questions_required: "Lütfen en az bir soru isteyin",
    error: "Sorular oluşturulurken bir hata oluştu. Lütfen tekrar deneyin.",
    answer: "Cevap",
    true_label: "Doğru",
    false_label: "Yanlış",
    subject_label: "Ders",
    answer_key: "Cevap Anahtarı",
    questions_file_name: "sorular",
    answer_key_file_name: "cevap-anahtari",
};

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Tr => &TR,
        }
    }
}
