// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conditional source selection - subscribe to one of two branches based on a predicate.
//!
//! [`iif`] stores a predicate and a branch without evaluating anything. Every call to
//! [`Source::subscribe`](conflux_core::Source::subscribe) on the result evaluates the
//! predicate once, synchronously, and delegates the subscription to the chosen branch.
//!
//! # Behavior
//!
//! - Predicate `true`: behaves exactly like the `then` branch
//! - Predicate `false` with [`or_else`](ConditionalSource::or_else): behaves exactly like
//!   the `else` branch
//! - Predicate `false` without an `else` branch: completes immediately with no values
//! - Predicate fails ([`try_iif`] only): errors immediately with the predicate's error,
//!   neither branch is touched
//!
//! Both branches accept anything implementing [`IntoSource`](crate::IntoSource): any
//! native source, or a [`DeferredValue`](crate::DeferredValue) which emits its single
//! settlement.
//!
//! Re-subscribing re-evaluates the predicate. Results are never cached.
//!
//! # Examples
//!
//! ```rust
//! use conflux_core::{ConfluxError, SourceExt};
//! use conflux_create::{iif, of};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::{Arc, Mutex};
//!
//! let enabled = Arc::new(AtomicBool::new(true));
//! let flag = enabled.clone();
//! let source = iif(move || flag.load(Ordering::SeqCst), of(["new"])).or_else(of(["old"]));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! source.subscribe_with(move |v| sink.lock().unwrap().push(v), |_: ConfluxError| {}, || {});
//!
//! enabled.store(false, Ordering::SeqCst);
//! let sink = seen.clone();
//! source.subscribe_with(move |v| sink.lock().unwrap().push(v), |_: ConfluxError| {}, || {});
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["new", "old"]);
//! ```
//!
//! A fallible predicate surfaces its error as the sole terminal signal:
//!
//! ```rust
//! use conflux_core::{ConfluxError, SourceExt};
//! use conflux_create::{of, try_iif};
//! use std::sync::{Arc, Mutex};
//!
//! let source = try_iif(|| Err(ConfluxError::predicate_error("flag service down")), of([1]));
//!
//! let error = Arc::new(Mutex::new(None));
//! let sink = error.clone();
//! source.subscribe_with(
//!     |_: i32| panic!("no value expected"),
//!     move |e| *sink.lock().unwrap() = Some(e.to_string()),
//!     || panic!("no completion expected"),
//! );
//!
//! assert_eq!(
//!     error.lock().unwrap().as_deref(),
//!     Some("Predicate error: flag service down")
//! );
//! ```

mod implementation;

pub use implementation::{iif, try_iif, ConditionalSource};
