// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conditional source selection and source creation functions.
//!
//! # Overview
//!
//! - **[`iif`] / [`try_iif`]**: pick one of two branches each time the result is
//!   subscribed, based on a predicate evaluated at subscription time
//! - **[`DeferredValue`]**: promise-like single eventual value, usable as a branch
//! - **[`IntoSource`]**: the conversion every branch goes through; native sources pass
//!   through unchanged, deferred values become a [`DeferredSource`]
//! - **[`of`], [`empty`], [`throw_error`]**: synchronous creation functions
//! - **[`from_stream`]**: bridge a `futures::Stream` factory into a push source
//!
//! # Example
//!
//! ```rust
//! use conflux_core::SourceExt;
//! use conflux_create::{iif, DeferredValue};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let cached = true;
//! let source = iif(move || cached, DeferredValue::resolved(42))
//!     .or_else(DeferredValue::rejected("cache miss"));
//!
//! let mut stream = source.into_stream();
//! assert_eq!(stream.next().await.map(|item| item.unwrap()), Some(42));
//! assert!(stream.next().await.is_none());
//! # }
//! ```
//!
//! # Runtime Support
//!
//! Deferred values and stream bridges are driven on a background task spawned with
//! [`ConfluxTask`](conflux_core::ConfluxTask). With the default `runtime-tokio` feature,
//! subscribing to such a source must happen inside a Tokio runtime.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod deferred_source;
pub mod deferred_value;
pub mod from_iter;
pub mod from_stream;
pub mod iif;
pub mod into_source;

pub use self::deferred_source::DeferredSource;
pub use self::deferred_value::{DeferredValue, Resolver};
pub use self::from_iter::{empty, of, throw_error, Empty, Of, ThrowError};
pub use self::from_stream::{from_stream, FromStream};
pub use self::iif::{iif, try_iif, ConditionalSource};
pub use self::into_source::IntoSource;
