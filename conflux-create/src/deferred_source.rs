// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DeferredValue;
use conflux_core::conflux_mutex::Mutex;
use conflux_core::{ConfluxTask, Result, SharedSubscriber, Source, Teardown};
use futures::future::{self, Either};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettleState {
    Pending,
    Signaled,
    Disposed,
}

/// Source view of a [`DeferredValue`].
///
/// Each subscription awaits the shared value on a background task and then emits
/// exactly one value followed by completion, or exactly one error. Disposing the
/// subscription before settlement suppresses all delivery; the value itself keeps
/// running for any other holder.
///
/// # Panics
///
/// `subscribe` spawns on the configured runtime; with the `runtime-tokio` feature it
/// panics when called outside a Tokio runtime.
#[derive(Debug)]
pub struct DeferredSource<T> {
    value: DeferredValue<T>,
}

impl<T> DeferredSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(value: DeferredValue<T>) -> Self {
        Self { value }
    }
}

impl<T> Clone for DeferredSource<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T> Source<T> for DeferredSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        let state = Arc::new(Mutex::new(SettleState::Pending));
        let value = self.value.clone();
        let task_state = state.clone();

        let teardown = ConfluxTask::spawn(move |teardown| async move {
            // Disposal wins when both sides are ready.
            match future::select(teardown.disposed(), value).await {
                Either::Left(_) => {}
                Either::Right((result, _)) => {
                    settle(&task_state, &subscriber, result);
                    teardown.dispose();
                }
            }
        });

        teardown.add_fn(move || *state.lock() = SettleState::Disposed);
        teardown
    }
}

fn settle<T>(state: &Mutex<SettleState>, subscriber: &SharedSubscriber<T>, result: Result<T>) {
    {
        let mut state = state.lock();
        if *state != SettleState::Pending {
            debug!("deferred settlement after disposal ignored");
            return;
        }
        *state = SettleState::Signaled;
    }

    match result {
        Ok(value) => {
            subscriber.on_next(value);
            // The subscriber may have disposed from inside on_next.
            if *state.lock() == SettleState::Disposed {
                return;
            }
            subscriber.on_complete();
        }
        Err(error) => subscriber.on_error(error),
    }
}
