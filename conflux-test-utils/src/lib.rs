// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the conflux push-source library.
//!
//! This crate provides a recording subscriber and assertion helpers for testing
//! sources. It is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! ## `Recorder<T>`
//!
//! A [`Subscriber`](conflux_core::Subscriber) that records every signal it receives,
//! including signals that arrive after a terminal one, so tests can detect contract
//! violations:
//!
//! ```rust
//! use conflux_core::{SharedSubscriber, Source, Teardown};
//! use conflux_test_utils::{Notification, Recorder};
//!
//! struct Two;
//!
//! impl Source<i32> for Two {
//!     fn subscribe(&self, subscriber: SharedSubscriber<i32>) -> Teardown {
//!         subscriber.on_next(1);
//!         subscriber.on_next(2);
//!         subscriber.on_complete();
//!         Teardown::inert()
//!     }
//! }
//!
//! let recorder = Recorder::<i32>::new();
//! Two.subscribe(recorder.clone());
//!
//! assert_eq!(recorder.values(), vec![1, 2]);
//! assert_eq!(recorder.notifications().last(), Some(&Notification::Complete));
//! ```
//!
//! ## Using Assertion Helpers
//!
//! ```rust
//! use conflux_test_utils::assert_no_element_emitted;
//! use futures::stream;
//!
//! # async fn example() {
//! let mut empty = stream::pending::<i32>();
//! assert_no_element_emitted(&mut empty, 10).await;
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `recorder` - `Recorder<T>` and `Notification<T>`
//! - `helpers` - Assertion and utility functions for pulled streams

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;

use conflux_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use recorder::{Notification, Recorder};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// Useful as the per-subscription stream of a `from_stream` source.
///
/// # Example
///
/// ```rust
/// use conflux_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(7).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// assert_eq!(item, 7);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
