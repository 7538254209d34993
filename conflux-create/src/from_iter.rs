// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous creation functions: [`of`], [`empty`] and [`throw_error`].
//!
//! All of them deliver every signal before `subscribe` returns and hand back an inert
//! [`Teardown`].

use conflux_core::{ConfluxError, SharedSubscriber, Source, Teardown};
use core::marker::PhantomData;
use std::sync::Arc;

/// Emits a fixed sequence of values, then completes. See [`of`].
#[derive(Debug)]
pub struct Of<T> {
    values: Arc<[T]>,
}

/// A cold source emitting each of `values` to every subscriber, then completing.
///
/// ```
/// use conflux_core::{ConfluxError, SourceExt};
/// use conflux_create::of;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// of(['a', 'b']).subscribe_with(move |v| sink.lock().unwrap().push(v), |_: ConfluxError| {}, || {});
///
/// assert_eq!(*seen.lock().unwrap(), vec!['a', 'b']);
/// ```
pub fn of<T, I>(values: I) -> Of<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

impl<T> FromIterator<T> for Of<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Clone for Of<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Source<T> for Of<T>
where
    T: Clone + Send + Sync,
{
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        for value in self.values.iter() {
            subscriber.on_next(value.clone());
        }
        subscriber.on_complete();
        Teardown::inert()
    }
}

/// Completes immediately. See [`empty`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Source<T> for Empty<T> {
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        subscriber.on_complete();
        Teardown::inert()
    }
}

/// Errors immediately. See [`throw_error`].
pub struct ThrowError<T> {
    error: ConfluxError,
    _marker: PhantomData<fn() -> T>,
}

/// A source that errors every subscriber with `error` and emits nothing.
pub fn throw_error<T>(error: impl Into<ConfluxError>) -> ThrowError<T> {
    ThrowError {
        error: error.into(),
        _marker: PhantomData,
    }
}

impl<T> Source<T> for ThrowError<T> {
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        subscriber.on_error(self.error.clone());
        Teardown::inert()
    }
}
