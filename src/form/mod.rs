pub mod api_client;
pub mod exam_form;

pub use api_client::{GenerationApi, HttpGenerationApi};
pub use exam_form::{ExamExport, ExamForm};
