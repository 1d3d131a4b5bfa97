use crate::{SessionError, StorageError};

use std::path::PathBuf;

#[test]
fn given_file_read_error_when_is_transient_then_returns_true() {
    let err = StorageError::file_read(
        PathBuf::from("/test"),
        std::io::Error::other("test"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_file_remove_error_when_is_transient_then_returns_true() {
    let err = StorageError::file_remove(
        PathBuf::from("/test"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_invalid_key_error_when_is_transient_then_returns_false() {
    let err = StorageError::invalid_key("a/b", "bad key");
    assert!(!err.is_transient());
}

#[test]
fn given_backup_failed_error_when_is_transient_then_returns_false() {
    let err = StorageError::backup_failed(PathBuf::from("/test"), std::io::Error::other("x"));
    assert!(!err.is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StorageError::invalid_key("", "empty"),
        StorageError::dir_creation(PathBuf::from("/test"), std::io::Error::other("x")),
        StorageError::file_read(PathBuf::from("/test"), std::io::Error::other("x")),
        StorageError::file_write(PathBuf::from("/test"), std::io::Error::other("x")),
        StorageError::file_remove(PathBuf::from("/test"), std::io::Error::other("x")),
        StorageError::atomic_rename(
            PathBuf::from("/from"),
            PathBuf::from("/to"),
            std::io::Error::other("x"),
        ),
        StorageError::backup_failed(PathBuf::from("/test"), std::io::Error::other("x")),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_storage_error_when_into_session_error_then_storage_variant() {
    let storage_err = StorageError::invalid_key("", "empty");
    let session_err: SessionError = storage_err.into();

    match session_err {
        SessionError::Storage { .. } => {}
        other => panic!("Expected Storage variant, got {other:?}"),
    }
}

#[test]
fn given_serde_error_when_into_session_error_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let session_err: SessionError = json_err.into();

    match session_err {
        SessionError::Serialization { .. } => {}
        other => panic!("Expected Serialization variant, got {other:?}"),
    }
}

#[test]
fn given_not_signed_in_when_display_then_mentions_signed_in() {
    let err = SessionError::not_signed_in();
    assert!(err.to_string().contains("signed in"));
}
