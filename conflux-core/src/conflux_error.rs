// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the conflux push-stream library.
//!
//! Every terminal failure a [`Subscriber`](crate::Subscriber) can observe is a
//! [`ConfluxError`]. The type is `Clone` so a single failure can be replayed to late
//! subscribers of a subject or shared by every subscriber of a deferred value.
//!
//! # Examples
//!
//! ```
//! use conflux_core::{ConfluxError, Result};
//!
//! fn select_branch() -> Result<bool> {
//!     Err(ConfluxError::predicate_error("feature flag service unavailable"))
//! }
//!
//! assert!(matches!(select_branch(), Err(ConfluxError::PredicateError { .. })));
//! ```

use std::error::Error as StdError;
use std::sync::Arc;

/// Root error type for all conflux operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfluxError {
    /// Stream processing encountered an error
    ///
    /// General failure raised by a source that doesn't fit the other categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// A branch-selection predicate failed
    #[error("Predicate error: {context}")]
    PredicateError {
        /// Description of the predicate failure
        context: String,
    },

    /// A deferred value settled with a rejection
    #[error("Rejected: {reason}")]
    Rejected {
        /// The rejection reason
        reason: String,
    },

    /// Custom error from user code
    ///
    /// The original error is shared, not re-created, so every clone reports the same
    /// source chain.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn StdError + Send + Sync>),

    /// Multiple errors occurred
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<ConfluxError>,
    },
}

impl ConfluxError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a predicate error with the given context
    pub fn predicate_error(context: impl Into<String>) -> Self {
        Self::PredicateError {
            context: context.into(),
        }
    }

    /// Create a rejection with the given reason
    ///
    /// ```
    /// use conflux_core::ConfluxError;
    ///
    /// let error = ConfluxError::rejected(42);
    /// assert_eq!(error.to_string(), "Rejected: 42");
    /// ```
    pub fn rejected(reason: impl ToString) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Aggregate multiple user errors into a `MultipleErrors` variant
    pub fn from_user_errors<E>(errors: Vec<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors.into_iter().map(Self::user_error).collect();

        Self::MultipleErrors { count, errors }
    }

    /// Returns the rejection reason if this error came from a rejected deferred value.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::Rejected { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<&str> for ConfluxError {
    fn from(context: &str) -> Self {
        Self::stream_error(context)
    }
}

impl From<String> for ConfluxError {
    fn from(context: String) -> Self {
        Self::stream_error(context)
    }
}

/// Specialized Result type for conflux operations
pub type Result<T> = std::result::Result<T, ConfluxError>;

/// Extension trait for converting errors into `ConfluxError`
pub trait IntoConfluxError {
    /// Convert this error into a `ConfluxError` with additional context
    fn into_conflux_error(self, context: &str) -> ConfluxError;

    /// Convert this error into a `ConfluxError` without additional context
    fn into_conflux(self) -> ConfluxError
    where
        Self: Sized,
    {
        self.into_conflux_error("")
    }
}

impl<E: StdError + Send + Sync + 'static> IntoConfluxError for E {
    fn into_conflux_error(self, context: &str) -> ConfluxError {
        if context.is_empty() {
            ConfluxError::user_error(self)
        } else {
            ConfluxError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(ConfluxError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(ConfluxError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ConfluxError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            ConfluxError::UserError(inner) => ConfluxError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}
