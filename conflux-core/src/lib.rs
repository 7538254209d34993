// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for push-based conflux sources.
//!
//! - [`Source`]: anything that can be subscribed to, returning a [`Teardown`]
//! - [`Subscriber`]: the `on_next` / `on_error` / `on_complete` sink a source drives
//! - [`Teardown`]: idempotent, chainable disposal handle
//! - [`Subject`]: hot multicast source for pushing values imperatively
//! - [`ConfluxError`]: the terminal error type every source reports
//!
//! Bridges to the `futures` ecosystem live in [`SourceExt`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod conflux_error;
pub mod conflux_mutex;
pub mod conflux_task;
pub mod source;
pub mod source_ext;
pub mod stream_item;
pub mod subject;
pub mod subject_error;
pub mod subscriber;
pub mod teardown;

pub use self::conflux_error::{ConfluxError, IntoConfluxError, Result, ResultExt};
pub use self::conflux_task::ConfluxTask;
pub use self::source::{BoxSource, Source};
pub use self::source_ext::{SourceExt, SourceStream};
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::subscriber::{FnSubscriber, SharedSubscriber, Subscriber};
pub use self::teardown::{Disposed, Teardown};
