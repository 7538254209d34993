// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{SharedSubscriber, Teardown};
use std::sync::Arc;

/// A push-based producer of `T` values.
///
/// `subscribe` attaches a [`Subscriber`](crate::Subscriber) and returns the
/// [`Teardown`] for that subscription. Every call is an independent subscription;
/// a source holds configuration, not per-subscriber state.
///
/// Implementations must always return a usable teardown, even when the subscription
/// terminated before `subscribe` returned (see [`Teardown::inert`]).
pub trait Source<T>: Send + Sync {
    /// Attach `subscriber` and start delivering signals to it.
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown;
}

/// A type-erased, shareable source.
pub type BoxSource<T> = Arc<dyn Source<T>>;

impl<T, S> Source<T> for Arc<S>
where
    S: Source<T> + ?Sized,
{
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        (**self).subscribe(subscriber)
    }
}
