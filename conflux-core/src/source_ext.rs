// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConfluxError, FnSubscriber, Source, StreamItem, Subscriber, Teardown};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use std::sync::Arc;

/// Convenience methods available on every [`Source`].
pub trait SourceExt<T>: Source<T> {
    /// Subscribe with three closures instead of a [`Subscriber`] implementation.
    ///
    /// ```
    /// use conflux_core::{ConfluxError, SharedSubscriber, Source, SourceExt, Teardown};
    /// use std::sync::{Arc, Mutex};
    ///
    /// struct Answer;
    ///
    /// impl Source<i32> for Answer {
    ///     fn subscribe(&self, subscriber: SharedSubscriber<i32>) -> Teardown {
    ///         subscriber.on_next(42);
    ///         subscriber.on_complete();
    ///         Teardown::inert()
    ///     }
    /// }
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// Answer.subscribe_with(
    ///     move |value| sink.lock().unwrap().push(value),
    ///     |_: ConfluxError| {},
    ///     || {},
    /// );
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![42]);
    /// ```
    fn subscribe_with<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> Teardown
    where
        T: 'static,
        N: Fn(T) + Send + Sync + 'static,
        E: Fn(ConfluxError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(FnSubscriber::new(on_next, on_error, on_complete)))
    }

    /// Subscribe and expose the signals as a `futures::Stream`.
    ///
    /// Values arrive as `StreamItem::Value`, an error as a final `StreamItem::Error`,
    /// and completion ends the stream. Dropping the stream disposes the subscription.
    fn into_stream(&self) -> SourceStream<T>
    where
        T: Send + 'static,
    {
        let (tx, rx) = unbounded();
        let teardown = self.subscribe(Arc::new(ChannelSubscriber { tx }));
        SourceStream {
            receiver: rx,
            teardown,
        }
    }
}

impl<T, S> SourceExt<T> for S where S: Source<T> + ?Sized {}

struct ChannelSubscriber<T> {
    tx: UnboundedSender<StreamItem<T>>,
}

impl<T: Send> Subscriber<T> for ChannelSubscriber<T> {
    fn on_next(&self, value: T) {
        let _ = self.tx.unbounded_send(StreamItem::Value(value));
    }

    fn on_error(&self, error: ConfluxError) {
        let _ = self.tx.unbounded_send(StreamItem::Error(error));
        self.tx.close_channel();
    }

    fn on_complete(&self) {
        self.tx.close_channel();
    }
}

/// Stream returned by [`SourceExt::into_stream`].
#[derive(Debug)]
pub struct SourceStream<T> {
    receiver: UnboundedReceiver<StreamItem<T>>,
    teardown: Teardown,
}

impl<T> SourceStream<T> {
    /// The teardown of the underlying subscription.
    pub fn teardown(&self) -> &Teardown {
        &self.teardown
    }
}

impl<T> Stream for SourceStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl<T> Drop for SourceStream<T> {
    fn drop(&mut self) {
        self.teardown.dispose();
    }
}
