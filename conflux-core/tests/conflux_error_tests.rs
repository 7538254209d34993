// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use conflux_core::{ConfluxError, IntoConfluxError, ResultExt};
use std::error::Error;

#[derive(Debug)]
struct ServiceDown;

impl std::fmt::Display for ServiceDown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service down")
    }
}

impl Error for ServiceDown {}

#[test]
fn test_display_messages() {
    assert_eq!(
        ConfluxError::stream_error("x").to_string(),
        "Stream processing error: x"
    );
    assert_eq!(
        ConfluxError::predicate_error("flag").to_string(),
        "Predicate error: flag"
    );
    assert_eq!(ConfluxError::rejected(42).to_string(), "Rejected: 42");
    assert_eq!(
        ConfluxError::user_error(ServiceDown).to_string(),
        "User error: service down"
    );
}

#[test]
fn test_rejection_reason() {
    assert_eq!(ConfluxError::rejected("nope").rejection_reason(), Some("nope"));
    assert_eq!(ConfluxError::stream_error("x").rejection_reason(), None);
}

#[test]
fn test_clone_preserves_user_error_source() {
    let error = ConfluxError::user_error(ServiceDown);
    let cloned = error.clone();

    assert!(matches!(cloned, ConfluxError::UserError(_)));
    assert_eq!(
        cloned.source().map(ToString::to_string),
        Some("service down".to_string())
    );
}

#[test]
fn test_from_str_builds_stream_error() {
    let error: ConfluxError = "error".into();
    assert!(matches!(
        error,
        ConfluxError::StreamProcessingError { ref context } if context == "error"
    ));
}

#[test]
fn test_from_user_errors_counts() {
    let error = ConfluxError::from_user_errors(vec![ServiceDown, ServiceDown]);
    assert!(matches!(error, ConfluxError::MultipleErrors { count: 2, .. }));
}

#[test]
fn test_into_conflux_without_context_wraps_user_error() {
    let error = ServiceDown.into_conflux();
    assert!(matches!(error, ConfluxError::UserError(_)));
}

#[test]
fn test_into_conflux_error_with_context() {
    let error = ServiceDown.into_conflux_error("selecting branch");
    assert_eq!(
        error.to_string(),
        "Stream processing error: selecting branch: service down"
    );
}

#[test]
fn test_result_ext_context_wraps_user_errors_only() {
    let user: Result<(), ConfluxError> = Err(ConfluxError::user_error(ServiceDown));
    let wrapped = user.context("loading flags").unwrap_err();
    assert_eq!(
        wrapped.to_string(),
        "Stream processing error: loading flags: service down"
    );

    let rejected: Result<(), ConfluxError> = Err(ConfluxError::rejected(1));
    let unchanged = rejected.with_context(|| "ignored".to_string()).unwrap_err();
    assert_eq!(unchanged.rejection_reason(), Some("1"));
}
