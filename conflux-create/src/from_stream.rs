// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from `futures::Stream` into a push [`Source`].

use conflux_core::{ConfluxTask, SharedSubscriber, Source, StreamItem, Teardown};
use futures::future::{self, Either};
use futures::{Stream, StreamExt};

/// Source that drives a freshly created stream for every subscription. See [`from_stream`].
#[derive(Debug, Clone)]
pub struct FromStream<F> {
    factory: F,
}

/// Create a source from a stream factory.
///
/// Each subscription calls `factory` and pulls the resulting stream on a background
/// task: `StreamItem::Value` becomes `on_next`, `StreamItem::Error` terminates with
/// `on_error`, and the end of the stream completes. Disposing the subscription stops
/// pulling and drops the stream.
///
/// # Panics
///
/// Subscribing spawns on the configured runtime; with the `runtime-tokio` feature it
/// panics when called outside a Tokio runtime.
///
/// ```
/// use conflux_core::{ConfluxError, SourceExt, StreamItem};
/// use conflux_create::from_stream;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = from_stream(|| stream::iter(vec![1, 2, 3]).map(StreamItem::Value));
/// let mut pulled = source.into_stream();
///
/// assert_eq!(pulled.next().await, Some(StreamItem::Value(1)));
/// assert_eq!(pulled.next().await, Some(StreamItem::Value(2)));
/// assert_eq!(pulled.next().await, Some(StreamItem::Value(3)));
/// assert_eq!(pulled.next().await, None);
/// # }
/// ```
pub fn from_stream<T, S, F>(factory: F) -> FromStream<F>
where
    F: Fn() -> S + Send + Sync + 'static,
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    FromStream { factory }
}

impl<T, S, F> Source<T> for FromStream<F>
where
    F: Fn() -> S + Send + Sync + 'static,
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        let stream = (self.factory)();

        ConfluxTask::spawn(move |teardown| async move {
            let mut stream = Box::pin(stream);

            loop {
                match future::select(teardown.disposed(), stream.next()).await {
                    Either::Left(_) => return,
                    Either::Right((Some(StreamItem::Value(value)), _)) => subscriber.on_next(value),
                    Either::Right((Some(StreamItem::Error(error)), _)) => {
                        subscriber.on_error(error);
                        break;
                    }
                    Either::Right((None, _)) => {
                        subscriber.on_complete();
                        break;
                    }
                }
            }

            teardown.dispose();
        })
    }
}
