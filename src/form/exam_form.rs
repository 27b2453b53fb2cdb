use crate::{
    constants::Translations,
    errors::{AppError, AppResult},
    models::{
        domain::{option_label, Difficulty, Language, Question, QuestionCounts, QuestionType},
        dto::GenerateQuestionsRequest,
    },
    services::export_service::{export_answer_key, export_question_sheet, ExportedDocument},
};

use super::api_client::GenerationApi;

/// Both downloads offered once questions exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamExport {
    pub questions: ExportedDocument,
    pub answer_key: ExportedDocument,
}

/// State behind the exam form: inputs, results, loading flag and error slot.
///
/// Each network operation is split into a `begin_*` step, which validates
/// and flips the loading flag, and a `finish_*` step, which applies the
/// outcome. `submit` and `regenerate` run both halves around one call.
#[derive(Debug, Clone)]
pub struct ExamForm {
    pub subject: String,
    pub difficulty: Difficulty,
    pub language: Language,
    pub question_counts: QuestionCounts,
    topics_input: String,
    topics: Vec<String>,
    questions: Vec<Question>,
    loading: bool,
    error: Option<String>,
}

impl Default for ExamForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            difficulty: Difficulty::Medium,
            language: Language::En,
            question_counts: QuestionCounts::new(2, 2, 2),
            topics_input: String::new(),
            topics: Vec::new(),
            questions: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl ExamForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translations(&self) -> &'static Translations {
        Translations::for_language(self.language)
    }

    /// Stores the raw comma-separated input and the topics parsed from it.
    pub fn set_topics_input(&mut self, input: &str) {
        self.topics_input = input.to_string();
        self.topics = input
            .split(',')
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn topics_input(&self) -> &str {
        &self.topics_input
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Localized message for the first failing input check.
    pub fn validate(&self) -> Result<(), &'static str> {
        let t = self.translations();
        if self.subject.trim().is_empty() {
            return Err(t.subject_required);
        }
        if self.topics.is_empty() {
            return Err(t.topics_required);
        }
        if self.question_counts.total() == 0 {
            return Err(t.questions_required);
        }
        Ok(())
    }

    fn request(&self, target: Option<(usize, QuestionType)>) -> GenerateQuestionsRequest {
        GenerateQuestionsRequest {
            subject: self.subject.clone(),
            topics: self.topics.clone(),
            difficulty: self.difficulty,
            language: self.language,
            question_counts: self.question_counts,
            regenerate_index: target.map(|(index, _)| index),
            regenerate_question_type: target.map(|(_, question_type)| question_type),
        }
    }

    /// Returns the request to send, or `None` when a call is in flight or
    /// the inputs are invalid (the error slot then holds the reason).
    pub fn begin_submit(&mut self) -> Option<GenerateQuestionsRequest> {
        if self.loading {
            return None;
        }
        self.error = None;

        if let Err(message) = self.validate() {
            self.error = Some(message.to_string());
            return None;
        }

        self.loading = true;
        Some(self.request(None))
    }

    pub fn finish_submit(&mut self, result: AppResult<Vec<Question>>) {
        self.loading = false;
        match result {
            Ok(questions) => self.questions = questions,
            Err(e) => self.fail(e),
        }
    }

    pub async fn submit(&mut self, api: &dyn GenerationApi) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = api.generate(&request).await;
        let succeeded = result.is_ok();
        self.finish_submit(result);
        succeeded
    }

    /// Request for a single replacement of the question at `index`, typed
    /// after the question currently there.
    pub fn begin_regenerate(&mut self, index: usize) -> Option<GenerateQuestionsRequest> {
        if self.loading {
            return None;
        }
        let question_type = self.questions.get(index)?.question_type;

        self.error = None;
        self.loading = true;
        Some(self.request(Some((index, question_type))))
    }

    /// Replaces only `index`; every other entry is left in place.
    pub fn finish_regenerate(&mut self, index: usize, result: AppResult<Vec<Question>>) {
        self.loading = false;
        let replacement = result.and_then(|questions| {
            questions.into_iter().next().ok_or(AppError::EmptyResponse)
        });

        match replacement {
            Ok(question) => match self.questions.get_mut(index) {
                Some(slot) => *slot = question,
                None => log::warn!("Dropping regenerated question for stale index {}", index),
            },
            Err(e) => self.fail(e),
        }
    }

    pub async fn regenerate(&mut self, index: usize, api: &dyn GenerationApi) -> bool {
        let Some(request) = self.begin_regenerate(index) else {
            return false;
        };
        let result = api.generate(&request).await;
        let succeeded = result.is_ok();
        self.finish_regenerate(index, result);
        succeeded && self.error.is_none()
    }

    fn fail(&mut self, err: AppError) {
        log::warn!("Generation failed: {}", err);
        self.error = Some(self.translations().error.to_string());
    }

    /// Plain-text rendering of the current results.
    pub fn render(&self) -> String {
        let t = self.translations();
        let mut out = String::new();

        for (idx, question) in self.questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, question.question));
            match (question.question_type, &question.options) {
                (QuestionType::MultipleChoice, Some(options)) => {
                    for (opt_idx, option) in options.iter().enumerate() {
                        out.push_str(&format!("   {}. {}\n", option_label(opt_idx), option));
                    }
                }
                (QuestionType::TrueFalse, _) => {
                    out.push_str(&format!("   A. {}\n   B. {}\n", t.true_label, t.false_label));
                }
                _ => {}
            }
            out.push_str(&format!("   {}: {}\n\n", t.answer, question.answer));
        }

        out
    }

    pub fn export(&self) -> AppResult<ExamExport> {
        if self.questions.is_empty() {
            return Err(AppError::ValidationError("Nothing to export".into()));
        }
        let t = self.translations();

        Ok(ExamExport {
            questions: export_question_sheet(&self.subject, &self.questions, t)?,
            answer_key: export_answer_key(&self.subject, &self.questions, t)?,
        })
    }
}
