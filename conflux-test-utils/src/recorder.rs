// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_core::conflux_mutex::Mutex;
use conflux_core::{ConfluxError, Subscriber};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// One signal observed by a [`Recorder`].
#[derive(Debug, Clone)]
pub enum Notification<T> {
    Next(T),
    Error(ConfluxError),
    Complete,
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            // Errors compare by their rendered message
            (Notification::Error(a), Notification::Error(b)) => a.to_string() == b.to_string(),
            (Notification::Complete, Notification::Complete) => true,
            _ => false,
        }
    }
}

/// Subscriber that records every signal in arrival order.
///
/// Nothing is filtered: signals delivered after a terminal one are recorded too.
pub struct Recorder<T> {
    notifications: Mutex<Vec<Notification<T>>>,
    terminated: Notify,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            notifications: Mutex::new(Vec::new()),
            terminated: Notify::new(),
        })
    }

    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.notifications.lock().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.notifications
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// The first error received, if any.
    pub fn error(&self) -> Option<ConfluxError> {
        self.notifications.lock().iter().find_map(|n| match n {
            Notification::Error(e) => Some(e.clone()),
            _ => None,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.notifications
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Complete))
    }

    pub fn is_terminated(&self) -> bool {
        self.notifications
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Complete | Notification::Error(_)))
    }

    /// Number of terminal signals received. A well-behaved source yields at most one.
    pub fn terminal_count(&self) -> usize {
        self.notifications
            .lock()
            .iter()
            .filter(|n| matches!(n, Notification::Complete | Notification::Error(_)))
            .count()
    }

    /// Waits until a terminal signal arrives. Returns `false` on timeout.
    pub async fn wait_for_terminal(&self, timeout_ms: u64) -> bool {
        let wait = async {
            loop {
                let notified = self.terminated.notified();
                if self.is_terminated() {
                    return;
                }
                notified.await;
            }
        };

        tokio::time::timeout(Duration::from_millis(timeout_ms), wait)
            .await
            .is_ok()
    }

    fn record(&self, notification: Notification<T>) {
        let terminal = !matches!(notification, Notification::Next(_));
        self.notifications.lock().push(notification);
        if terminal {
            self.terminated.notify_waiters();
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Subscriber<T> for Recorder<T> {
    fn on_next(&self, value: T) {
        self.record(Notification::Next(value));
    }

    fn on_error(&self, error: ConfluxError) {
        self.record(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.record(Notification::Complete);
    }
}
