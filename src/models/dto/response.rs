use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}
