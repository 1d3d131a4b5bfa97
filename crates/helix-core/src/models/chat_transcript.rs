use crate::{ChatExchange, CoreError, CoreResult, Rating, fixtures};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// In-memory chat history for one employee dashboard session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    exchanges: Vec<ChatExchange>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript pre-populated with the demo exchange shown on first load.
    pub fn seeded() -> Self {
        Self {
            exchanges: vec![fixtures::seed_exchange()],
        }
    }

    pub fn exchanges(&self) -> &[ChatExchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Append a question with the canned demo answer.
    ///
    /// Blank questions are dropped and return `None`.
    pub fn ask(&mut self, question: &str) -> Option<&ChatExchange> {
        if question.trim().is_empty() {
            return None;
        }

        self.exchanges.push(ChatExchange {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: fixtures::DEMO_ANSWER.to_string(),
            rating: None,
        });
        self.exchanges.last()
    }

    /// Set (or replace) the rating on an exchange.
    #[track_caller]
    pub fn rate(&mut self, id: &str, rating: Rating) -> CoreResult<()> {
        match self.exchanges.iter_mut().find(|exchange| exchange.id == id) {
            Some(exchange) => {
                exchange.rating = Some(rating);
                Ok(())
            }
            None => Err(CoreError::UnknownExchange {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
