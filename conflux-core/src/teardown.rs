// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Idempotent, chainable disposal handle returned by every subscription.
//!
//! A [`Teardown`] can be cloned to create multiple handles to the same disposal state.
//! When [`dispose()`](Teardown::dispose) is called on any clone, registered finalizers
//! run exactly once, chained child teardowns are disposed, and every waiter on
//! [`disposed()`](Teardown::disposed) is woken.

use crate::conflux_mutex::Mutex;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

type Finalizer = Box<dyn FnOnce() + Send>;

/// Handle that releases the resources held by a subscription.
///
/// # Example
///
/// ```
/// use conflux_core::Teardown;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicUsize::new(0));
/// let teardown = Teardown::from_fn({
///     let released = released.clone();
///     move || {
///         released.fetch_add(1, Ordering::SeqCst);
///     }
/// });
///
/// teardown.dispose();
/// teardown.dispose();
///
/// assert!(teardown.is_disposed());
/// assert_eq!(released.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Teardown {
    inner: Arc<Inner>,
}

struct Inner {
    disposed: AtomicBool,
    event: Event,
    finalizers: Mutex<Vec<Finalizer>>,
}

impl Teardown {
    /// Create an active teardown with nothing registered.
    pub fn new() -> Self {
        Self::with_state(false)
    }

    /// Create an active teardown that runs `finalizer` when disposed.
    pub fn from_fn<F>(finalizer: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let teardown = Self::new();
        teardown.add_fn(finalizer);
        teardown
    }

    /// Create a teardown that is already disposed.
    ///
    /// Returned by subscriptions that terminate before `subscribe` returns, so callers
    /// always receive a handle. Disposing it again has no effect.
    pub fn inert() -> Self {
        Self::with_state(true)
    }

    fn with_state(disposed: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                disposed: AtomicBool::new(disposed),
                event: Event::new(),
                finalizers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register a finalizer to run on disposal.
    ///
    /// If this teardown is already disposed, the finalizer runs immediately.
    pub fn add_fn<F>(&self, finalizer: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut finalizers = self.inner.finalizers.lock();
            if !self.is_disposed() {
                finalizers.push(Box::new(finalizer));
                return;
            }
        }
        finalizer();
    }

    /// Chain `child` so that disposing `self` also disposes it.
    ///
    /// If this teardown is already disposed, `child` is disposed immediately.
    pub fn add(&self, child: Teardown) {
        if Arc::ptr_eq(&self.inner, &child.inner) {
            return;
        }
        self.add_fn(move || child.dispose());
    }

    /// Dispose the teardown, running finalizers and waking all listeners.
    ///
    /// This method is idempotent. Calling it multiple times has the same effect
    /// as calling it once.
    pub fn dispose(&self) {
        let finalizers = {
            let mut finalizers = self.inner.finalizers.lock();
            if self.inner.disposed.swap(true, Ordering::AcqRel) {
                return;
            }
            core::mem::take(&mut *finalizers)
        };

        self.inner.event.notify(usize::MAX);

        // Finalizers run outside the lock so they may touch this teardown again.
        for finalizer in finalizers {
            finalizer();
        }
    }

    /// Check if the teardown has been disposed (non-blocking).
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Wait asynchronously until the teardown is disposed.
    ///
    /// If the teardown is already disposed, this returns immediately.
    pub fn disposed(&self) -> Disposed<'_> {
        Disposed {
            teardown: self,
            listener: None,
        }
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Future returned by [`Teardown::disposed()`].
pub struct Disposed<'a> {
    teardown: &'a Teardown,
    listener: Option<EventListener>,
}

impl Future for Disposed<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.teardown.is_disposed() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    self.listener = None;
                }
                // Listen, then re-check the flag: dispose() may have run in between.
                None => self.listener = Some(self.teardown.inner.event.listen()),
            }
        }
    }
}
