use crate::fixtures::{DEMO_ANSWER, SEED_QUESTION};
use crate::{ChatTranscript, CoreError, Rating};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_seeded_transcript_then_contains_rated_pto_exchange() {
    let transcript = ChatTranscript::seeded();

    assert_that!(transcript.len(), eq(1));
    let first = &transcript.exchanges()[0];
    assert_that!(first.question.as_str(), eq(SEED_QUESTION));
    assert_that!(first.rating, some(eq(Rating::Up)));
}

#[test]
fn given_question_when_ask_then_appends_demo_answer() {
    // Given
    let mut transcript = ChatTranscript::seeded();

    // When
    let exchange = transcript.ask("What is the remote work policy?").cloned();

    // Then
    let exchange = exchange.unwrap();
    assert_that!(exchange.answer.as_str(), eq(DEMO_ANSWER));
    assert_that!(exchange.rating, none());
    assert_that!(transcript.len(), eq(2));
}

#[test]
fn given_blank_question_when_ask_then_ignored() {
    let mut transcript = ChatTranscript::new();

    assert!(transcript.ask("").is_none());
    assert!(transcript.ask("   \t\n").is_none());
    assert!(transcript.is_empty());
}

#[test]
fn given_two_questions_when_ask_then_ids_differ() {
    let mut transcript = ChatTranscript::new();

    let first = transcript.ask("one").map(|e| e.id.clone()).unwrap();
    let second = transcript.ask("two").map(|e| e.id.clone()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_existing_exchange_when_rate_then_rating_replaced() {
    // Given
    let mut transcript = ChatTranscript::seeded();

    // When
    transcript.rate("1", Rating::Down).unwrap();

    // Then
    assert_that!(transcript.exchanges()[0].rating, some(eq(Rating::Down)));
}

#[test]
fn given_unknown_id_when_rate_then_unknown_exchange_error() {
    let mut transcript = ChatTranscript::seeded();

    let result = transcript.rate("missing", Rating::Up);

    match result {
        Err(CoreError::UnknownExchange { id, .. }) => assert_eq!(id, "missing"),
        other => panic!("Expected UnknownExchange, got {other:?}"),
    }
}
