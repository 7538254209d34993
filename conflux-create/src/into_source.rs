// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConditionalSource, DeferredSource, DeferredValue, Empty, FromStream, Of, ThrowError};
use conflux_core::{BoxSource, Source, StreamItem, Subject};
use futures::Stream;
use std::sync::Arc;

/// Anything that can serve as a branch of a conditional source.
///
/// Every native source of this workspace converts to itself unchanged. A
/// [`DeferredValue`] converts to a [`DeferredSource`] that emits its single settlement.
/// Any other [`Source`] can be used as a branch once erased into a [`BoxSource`].
/// The conversion itself does no work: nothing is polled or subscribed until the
/// returned source is subscribed.
///
/// ```
/// use conflux_core::{BoxSource, SharedSubscriber, Source, Teardown};
/// use conflux_create::iif;
/// use std::sync::Arc;
///
/// struct Never;
///
/// impl Source<i32> for Never {
///     fn subscribe(&self, _subscriber: SharedSubscriber<i32>) -> Teardown {
///         Teardown::new()
///     }
/// }
///
/// let branch: BoxSource<i32> = Arc::new(Never);
/// let source = iif(|| true, branch);
/// assert!(!source.has_else());
/// ```
pub trait IntoSource<T> {
    fn into_source(self) -> BoxSource<T>;
}

macro_rules! impl_into_source {
    ($($source:ident),* $(,)?) => {
        $(
            impl<T> IntoSource<T> for $source<T>
            where
                $source<T>: Source<T>,
                T: 'static,
            {
                fn into_source(self) -> BoxSource<T> {
                    Arc::new(self)
                }
            }
        )*
    };
}

impl_into_source!(Of, Empty, ThrowError, ConditionalSource, DeferredSource, Subject);

impl<T, S, F> IntoSource<T> for FromStream<F>
where
    F: Fn() -> S + Send + Sync + 'static,
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn into_source(self) -> BoxSource<T> {
        Arc::new(self)
    }
}

impl<T> IntoSource<T> for BoxSource<T> {
    fn into_source(self) -> BoxSource<T> {
        self
    }
}

impl<T> IntoSource<T> for DeferredValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn into_source(self) -> BoxSource<T> {
        Arc::new(DeferredSource::new(self))
    }
}
