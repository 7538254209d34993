// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations.
///
/// These errors describe misuse of a [`Subject`](crate::Subject) by its producer and
/// are distinct from the [`ConfluxError`](crate::ConfluxError) values delivered to
/// subscribers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has already completed or errored and cannot accept new signals.
    #[error("Subject is closed")]
    Closed,
}
