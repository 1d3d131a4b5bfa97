use crate::Rating;

use serde::{Deserialize, Serialize};

/// One question put to the assistant and the answer it gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub rating: Option<Rating>,
}
