// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber push source.
//!
//! A [`Subject`] forwards each value it is given to all subscribers attached at that
//! moment.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values sent after subscribing.
//! - **Synchronous**: `next` delivers to every subscriber before returning.
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Terminal replay**: After `error` or `complete`, new subscribers immediately receive
//!   the same terminal signal.
//!
//! ## Example
//!
//! ```
//! use conflux_core::{SourceExt, StreamItem, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut stream = subject.into_stream();
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.complete().unwrap();
//!
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::conflux_mutex::Mutex;
use crate::{ConfluxError, SharedSubscriber, Source, SubjectError, Teardown};
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

#[derive(Clone)]
enum Terminal {
    Completed,
    Errored(ConfluxError),
}

// `detached` is set under the state lock when the subscriber is terminated or
// removed; deliveries from an older snapshot check it first.
struct Attached<T> {
    id: u64,
    subscriber: SharedSubscriber<T>,
    detached: Arc<AtomicBool>,
}

struct SubjectState<T> {
    terminal: Option<Terminal>,
    next_id: u64,
    subscribers: Vec<Attached<T>>,
}

/// A hot source that pushes values to all current subscribers.
///
/// See the [module documentation](crate::subject) for examples and more details.
pub struct Subject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Send a value to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has completed or errored.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        for (subscriber, detached) in self.snapshot()? {
            // An earlier subscriber may have terminated the subject or disposed this one.
            if !detached.load(Ordering::Acquire) {
                subscriber.on_next(value.clone());
            }
        }
        Ok(())
    }

    /// Terminate all subscribers with `error`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn error(&self, error: ConfluxError) -> Result<(), SubjectError> {
        for subscriber in self.terminate(Terminal::Errored(error.clone()))? {
            subscriber.on_error(error.clone());
        }
        Ok(())
    }

    /// Complete all subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn complete(&self) -> Result<(), SubjectError> {
        for subscriber in self.terminate(Terminal::Completed)? {
            subscriber.on_complete();
        }
        Ok(())
    }

    /// Returns `true` if the subject has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns the number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    #[allow(clippy::type_complexity)]
    fn snapshot(&self) -> Result<Vec<(SharedSubscriber<T>, Arc<AtomicBool>)>, SubjectError> {
        let state = self.state.lock();
        if state.terminal.is_some() {
            debug!("push to a closed subject rejected");
            return Err(SubjectError::Closed);
        }
        Ok(state
            .subscribers
            .iter()
            .map(|a| (a.subscriber.clone(), a.detached.clone()))
            .collect())
    }

    fn terminate(&self, terminal: Terminal) -> Result<Vec<SharedSubscriber<T>>, SubjectError> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            debug!("terminal signal to a closed subject rejected");
            return Err(SubjectError::Closed);
        }
        state.terminal = Some(terminal);
        Ok(state
            .subscribers
            .drain(..)
            .map(|a| {
                a.detached.store(true, Ordering::Release);
                a.subscriber
            })
            .collect())
    }
}

impl<T: Clone + Send + 'static> Source<T> for Subject<T> {
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        let mut state = self.state.lock();

        if let Some(terminal) = state.terminal.clone() {
            drop(state);
            match terminal {
                Terminal::Completed => subscriber.on_complete(),
                Terminal::Errored(error) => subscriber.on_error(error),
            }
            return Teardown::inert();
        }

        let id = state.next_id;
        state.next_id += 1;
        let detached = Arc::new(AtomicBool::new(false));
        state.subscribers.push(Attached {
            id,
            subscriber,
            detached: detached.clone(),
        });

        let weak: Weak<Mutex<SubjectState<T>>> = Arc::downgrade(&self.state);
        Teardown::from_fn(move || {
            match weak.upgrade() {
                Some(state) => {
                    let mut state = state.lock();
                    detached.store(true, Ordering::Release);
                    state.subscribers.retain(|a| a.id != id);
                }
                None => detached.store(true, Ordering::Release),
            }
        })
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
