pub mod request;
pub mod response;

pub use request::{ExportRequest, GenerateQuestionsRequest};
pub use response::GenerateQuestionsResponse;
