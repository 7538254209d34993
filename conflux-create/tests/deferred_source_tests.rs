// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use conflux_core::conflux_mutex::Mutex;
use conflux_core::{ConfluxError, Source, Subscriber, Teardown};
use conflux_create::{iif, DeferredSource, DeferredValue, IntoSource};
use conflux_test_utils::{Notification, Recorder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_dispose_before_settlement_suppresses_delivery() -> anyhow::Result<()> {
    // Arrange
    let (resolver, value) = DeferredValue::<i32>::deferred();
    let source = iif(|| true, value);
    let recorder = Recorder::<i32>::new();

    // Act
    let teardown = source.subscribe(recorder.clone());
    teardown.dispose();
    resolver.resolve(1);
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert!(recorder.notifications().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dispose_before_rejection_suppresses_error() -> anyhow::Result<()> {
    let (resolver, value) = DeferredValue::<i32>::deferred();
    let recorder = Recorder::<i32>::new();

    let teardown = value.into_source().subscribe(recorder.clone());
    teardown.dispose();
    resolver.reject("late");
    sleep(Duration::from_millis(50)).await;

    assert!(recorder.notifications().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_settlement_after_subscribe_is_delivered() -> anyhow::Result<()> {
    // Arrange
    let (resolver, value) = DeferredValue::<String>::deferred();
    let recorder = Recorder::<String>::new();
    let teardown = DeferredSource::new(value).subscribe(recorder.clone());

    // Act
    sleep(Duration::from_millis(10)).await;
    assert!(recorder.notifications().is_empty());
    resolver.resolve("ready".to_string());

    // Assert
    assert!(recorder.wait_for_terminal(1000).await);
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next("ready".to_string()),
            Notification::Complete
        ]
    );
    sleep(Duration::from_millis(10)).await;
    assert!(teardown.is_disposed());

    Ok(())
}

#[tokio::test]
async fn test_failed_value_is_delivered_unmodified() -> anyhow::Result<()> {
    let source = DeferredValue::<i32>::failed(ConfluxError::predicate_error("x")).into_source();
    let recorder = Recorder::<i32>::new();

    source.subscribe(recorder.clone());

    assert!(recorder.wait_for_terminal(1000).await);
    assert!(matches!(
        recorder.error(),
        Some(ConfluxError::PredicateError { .. })
    ));
    assert_eq!(recorder.terminal_count(), 1);
    assert!(recorder.values().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_every_subscriber_sees_the_same_settlement() -> anyhow::Result<()> {
    // Arrange
    let (resolver, value) = DeferredValue::<i32>::deferred();
    let source = iif(|| true, value);
    let recorders: Vec<_> = (0..4).map(|_| Recorder::<i32>::new()).collect();

    // Act
    for recorder in &recorders {
        source.subscribe(recorder.clone());
    }
    resolver.resolve(9);

    // Assert
    for recorder in &recorders {
        assert!(recorder.wait_for_terminal(1000).await);
        assert_eq!(
            recorder.notifications(),
            vec![Notification::Next(9), Notification::Complete]
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_resubscribing_after_settlement_replays_result() -> anyhow::Result<()> {
    let source = iif(|| true, DeferredValue::resolved(5));

    let first = Recorder::<i32>::new();
    source.subscribe(first.clone());
    assert!(first.wait_for_terminal(1000).await);

    let second = Recorder::<i32>::new();
    source.subscribe(second.clone());
    assert!(second.wait_for_terminal(1000).await);

    assert_eq!(first.values(), vec![5]);
    assert_eq!(second.values(), vec![5]);

    Ok(())
}

#[tokio::test]
async fn test_unsettled_value_never_signals() -> anyhow::Result<()> {
    let (resolver, value) = DeferredValue::<i32>::deferred();
    drop(resolver);
    let recorder = Recorder::<i32>::new();

    let teardown = iif(|| true, value).subscribe(recorder.clone());

    assert!(!recorder.wait_for_terminal(50).await);
    assert!(!teardown.is_disposed());
    teardown.dispose();

    Ok(())
}

/// Disposes its own subscription from inside `on_next`.
struct DisposeOnNext {
    teardown: Mutex<Option<Teardown>>,
    recorder: Arc<Recorder<i32>>,
}

impl Subscriber<i32> for DisposeOnNext {
    fn on_next(&self, value: i32) {
        self.recorder.on_next(value);
        if let Some(teardown) = self.teardown.lock().take() {
            teardown.dispose();
        }
    }

    fn on_error(&self, error: ConfluxError) {
        self.recorder.on_error(error);
    }

    fn on_complete(&self) {
        self.recorder.on_complete();
    }
}

#[tokio::test]
async fn test_dispose_inside_on_next_suppresses_completion() -> anyhow::Result<()> {
    // Arrange
    let (resolver, value) = DeferredValue::<i32>::deferred();
    let recorder = Recorder::<i32>::new();
    let subscriber = Arc::new(DisposeOnNext {
        teardown: Mutex::new(None),
        recorder: recorder.clone(),
    });

    // Act
    let teardown = iif(|| true, value).subscribe(subscriber.clone());
    *subscriber.teardown.lock() = Some(teardown);
    resolver.resolve(3);
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Next(3)]);

    Ok(())
}

#[cfg(feature = "runtime-tokio")]
#[test]
#[should_panic]
fn test_subscribe_outside_runtime_panics() {
    let recorder = Recorder::<i32>::new();

    iif(|| true, DeferredValue::resolved(1)).subscribe(recorder);
}
