// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Conflux
//!
//! Push-based reactive sources with declarative branch selection.
//!
//! ## Overview
//!
//! A [`Source`] pushes values into a [`Subscriber`] and hands back a [`Teardown`] that
//! ends the subscription. [`iif`] builds a source that, on every subscription, asks a
//! predicate which of two branches to attach to. A branch is either a native source or
//! a [`DeferredValue`], a promise-like single eventual value that is turned into a
//! one-shot source on the fly.
//!
//! ## Quick Start
//!
//! ```rust
//! use conflux::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let use_cache = false;
//! let source = iif(move || use_cache, of(["cached"]))
//!     .or_else(DeferredValue::resolved("fetched"));
//!
//! let mut stream = source.into_stream();
//! assert_eq!(stream.next().await, Some(StreamItem::Value("fetched")));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```
//!
//! ## Crates
//!
//! - `conflux-core`: source, subscriber and teardown contracts, [`Subject`], errors
//! - `conflux-create`: [`iif`], [`DeferredValue`] and creation functions
//!
//! ## Features
//!
//! - `runtime-tokio` (default), `runtime-smol`, `runtime-async-std`: runtime used to
//!   drive deferred values and stream bridges
//! - `tracing`: structured logging through `tracing`

pub use conflux_core::{
    BoxSource, ConfluxError, ConfluxTask, FnSubscriber, Result, SharedSubscriber, Source,
    SourceExt, SourceStream, StreamItem, Subject, SubjectError, Subscriber, Teardown,
};
pub use conflux_create::{
    empty, from_stream, iif, of, throw_error, try_iif, ConditionalSource, DeferredSource,
    DeferredValue, IntoSource, Resolver,
};

/// Everything needed to build and subscribe to sources.
pub mod prelude {
    pub use conflux_core::{
        ConfluxError, Source, SourceExt, StreamItem, Subject, Subscriber, Teardown,
    };
    pub use conflux_create::{
        empty, from_stream, iif, of, throw_error, try_iif, DeferredValue, IntoSource,
    };
}
