// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Promise-like single eventual value.
//!
//! A [`DeferredValue`] settles at most once, with either a value or a [`ConfluxError`].
//! Every clone observes the same settlement, and the underlying future is driven only
//! once no matter how many clones await it.
//!
//! # Example
//!
//! ```
//! use conflux_create::DeferredValue;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (resolver, value) = DeferredValue::<i32>::deferred();
//! let other = value.clone();
//!
//! resolver.resolve(42);
//!
//! assert_eq!(value.await.ok(), Some(42));
//! assert_eq!(other.await.ok(), Some(42));
//! # }
//! ```

use conflux_core::{ConfluxError, Result};
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt, Shared};

/// A cloneable, one-shot eventual `Result<T, ConfluxError>`.
pub struct DeferredValue<T> {
    inner: Shared<BoxFuture<'static, Result<T>>>,
}

impl<T> DeferredValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wrap `future`; it is polled lazily, the first time any clone is awaited.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// A value that is already resolved with `value`.
    pub fn resolved(value: T) -> Self {
        Self::new(future::ready(Ok(value)))
    }

    /// A value that is already rejected with `reason`.
    ///
    /// The settlement is `ConfluxError::Rejected`.
    pub fn rejected(reason: impl ToString) -> Self {
        Self::failed(ConfluxError::rejected(reason))
    }

    /// A value that is already settled with `error`.
    pub fn failed(error: ConfluxError) -> Self {
        Self::new(future::ready(Err(error)))
    }

    /// A pending value together with the [`Resolver`] that settles it.
    ///
    /// Dropping the resolver without settling leaves the value pending forever.
    pub fn deferred() -> (Resolver<T>, Self) {
        let (tx, rx) = oneshot::channel();
        let value = Self::new(async move {
            match rx.await {
                Ok(result) => result,
                Err(oneshot::Canceled) => future::pending().await,
            }
        });
        (Resolver { tx }, value)
    }

    /// The settlement, if some clone has already observed it.
    pub fn peek(&self) -> Option<&Result<T>> {
        self.inner.peek()
    }
}

impl<T> Clone for DeferredValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Future for DeferredValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl<T> fmt::Debug for DeferredValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredValue").finish_non_exhaustive()
    }
}

/// Settles the [`DeferredValue`] created alongside it by [`DeferredValue::deferred`].
#[derive(Debug)]
pub struct Resolver<T> {
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Resolver<T> {
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settle with `ConfluxError::Rejected`.
    pub fn reject(self, reason: impl ToString) {
        self.settle(Err(ConfluxError::rejected(reason)));
    }

    pub fn fail(self, error: ConfluxError) {
        self.settle(Err(error));
    }

    fn settle(self, result: Result<T>) {
        if self.tx.send(result).is_err() {
            debug!("deferred value dropped before it was settled");
        }
    }
}
