// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic background tasks tied to a [`Teardown`].
//!
//! Sources that produce asynchronously (deferred values, stream bridges) do their
//! waiting on a background task so that `subscribe` itself never blocks.
//!
//! # Runtime Support
//!
//! - **Tokio**: `tokio::spawn` (default, requires a Tokio runtime context)
//! - **smol**: `smol::spawn(..).detach()`
//! - **async-std**: `async_std::task::spawn`
//! - **none**: a dedicated thread running `futures::executor::block_on`
//!
//! Select the runtime via feature flags: `runtime-tokio`, `runtime-smol`,
//! `runtime-async-std`.

use crate::Teardown;
use core::future::Future;

/// Spawner for subscription-scoped background work.
#[derive(Debug, Clone, Copy)]
pub struct ConfluxTask;

impl ConfluxTask {
    /// Spawn a background task bound to a fresh teardown.
    ///
    /// The closure receives a clone of the teardown that is returned to the caller.
    /// The spawned future should monitor it and exit once it is disposed.
    ///
    /// # Panics
    ///
    /// With the `runtime-tokio` feature, panics when called outside a Tokio runtime
    /// (see `tokio::spawn`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use conflux_core::ConfluxTask;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let teardown = ConfluxTask::spawn(|teardown| async move {
    ///     teardown.disposed().await;
    /// });
    ///
    /// teardown.dispose();
    /// assert!(teardown.is_disposed());
    /// # }
    /// ```
    pub fn spawn<F, Fut>(f: F) -> Teardown
    where
        F: FnOnce(Teardown) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let teardown = Teardown::new();
        Self::spawn_detached(f(teardown.clone()));
        teardown
    }

    /// Spawn `future` on the configured runtime without any handle.
    ///
    /// # Panics
    ///
    /// With the `runtime-tokio` feature, panics when called outside a Tokio runtime.
    pub fn spawn_detached<Fut>(future: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        #[cfg(feature = "runtime-tokio")]
        tokio::spawn(future);

        #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
        smol::spawn(future).detach();

        #[cfg(all(
            feature = "runtime-async-std",
            not(feature = "runtime-tokio"),
            not(feature = "runtime-smol")
        ))]
        async_std::task::spawn(future);

        #[cfg(not(any(
            feature = "runtime-tokio",
            feature = "runtime-smol",
            feature = "runtime-async-std"
        )))]
        std::thread::spawn(move || futures::executor::block_on(future));
    }
}
