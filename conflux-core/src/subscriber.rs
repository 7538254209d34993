// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ConfluxError;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The sink driven by a [`Source`](crate::Source).
///
/// A source calls `on_next` zero or more times, followed by exactly one of
/// `on_error` or `on_complete`. Nothing is delivered after the terminal signal.
///
/// Callbacks take `&self` because the same subscriber is shared between the source
/// that produces values and the code that disposes the subscription.
pub trait Subscriber<T>: Send + Sync {
    /// Receives the next value.
    fn on_next(&self, value: T);

    /// Receives the terminal error.
    fn on_error(&self, error: ConfluxError);

    /// Receives the terminal completion.
    fn on_complete(&self);
}

/// A subscriber shared between a source and its subscription.
pub type SharedSubscriber<T> = Arc<dyn Subscriber<T>>;

/// Subscriber built from three closures.
///
/// Drops every signal that arrives after the first terminal one, so a misbehaving
/// source cannot call `on_complete` twice or emit after an error.
///
/// ```
/// use conflux_core::{ConfluxError, FnSubscriber, Subscriber};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let completions = AtomicUsize::new(0);
/// let subscriber = FnSubscriber::new(|_: i32| {}, |_: ConfluxError| {}, || {
///     completions.fetch_add(1, Ordering::SeqCst);
/// });
///
/// Subscriber::<i32>::on_complete(&subscriber);
/// Subscriber::<i32>::on_complete(&subscriber);
/// assert_eq!(completions.load(Ordering::SeqCst), 1);
/// ```
pub struct FnSubscriber<N, E, C> {
    on_next: N,
    on_error: E,
    on_complete: C,
    closed: AtomicBool,
}

impl<N, E, C> FnSubscriber<N, E, C> {
    /// Creates a subscriber from the three callbacks.
    pub fn new(on_next: N, on_error: E, on_complete: C) -> Self {
        Self {
            on_next,
            on_error,
            on_complete,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns `true` once a terminal signal has been received.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }
}

impl<T, N, E, C> Subscriber<T> for FnSubscriber<N, E, C>
where
    N: Fn(T) + Send + Sync,
    E: Fn(ConfluxError) + Send + Sync,
    C: Fn() + Send + Sync,
{
    fn on_next(&self, value: T) {
        if !self.is_closed() {
            (self.on_next)(value);
        }
    }

    fn on_error(&self, error: ConfluxError) {
        if self.close() {
            (self.on_error)(error);
        }
    }

    fn on_complete(&self) {
        if self.close() {
            (self.on_complete)();
        }
    }
}

impl<N, E, C> fmt::Debug for FnSubscriber<N, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubscriber")
            .field("closed", &self.is_closed())
            .finish()
    }
}
