// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use conflux_core::{
    BoxSource, ConfluxError, SharedSubscriber, Source, Subject, Subscriber, Teardown,
};
use conflux_create::{empty, iif, of, throw_error, try_iif, DeferredValue};
use conflux_test_utils::{Notification, Recorder};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_iif_true_selects_then_branch() {
    // Arrange
    let source = iif(|| true, of(['a']));
    let recorder = Recorder::<char>::new();

    // Act
    let teardown = source.subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next('a'), Notification::Complete]
    );
    assert!(teardown.is_disposed());
}

#[test]
fn test_iif_false_selects_else_branch() {
    // Arrange
    let source = iif(|| false, of(['a'])).or_else(of(['b']));
    let recorder = Recorder::<char>::new();

    // Act
    source.subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next('b'), Notification::Complete]
    );
}

#[test]
fn test_iif_false_without_else_completes_immediately() {
    // Arrange
    let source = iif(|| false, of(['a']));
    let recorder = Recorder::<char>::new();

    // Act
    let teardown = source.subscribe(recorder.clone());

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Complete]);
    assert!(teardown.is_disposed());
    assert!(!source.has_else());
}

#[test]
fn test_try_iif_predicate_error_is_sole_signal() {
    // Arrange
    let source = try_iif(|| Err("error"), of(['a'])).or_else(of(['b']));
    let recorder = Recorder::<char>::new();

    // Act
    let teardown = source.subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(ConfluxError::stream_error("error"))]
    );
    assert!(teardown.is_disposed());
}

#[test]
fn test_try_iif_passes_conflux_error_unmodified() {
    let source = try_iif(
        || Err(ConfluxError::predicate_error("flag service down")),
        of([1]),
    );
    let recorder = Recorder::<i32>::new();

    source.subscribe(recorder.clone());

    assert!(matches!(
        recorder.error(),
        Some(ConfluxError::PredicateError { ref context }) if context == "flag service down"
    ));
    assert_eq!(recorder.terminal_count(), 1);
}

#[test]
fn test_try_iif_ok_predicate_behaves_like_iif() {
    let source = try_iif(|| Ok::<_, ConfluxError>(false), of([1])).or_else(of([2, 3]));
    let recorder = Recorder::<i32>::new();

    source.subscribe(recorder.clone());

    assert_eq!(recorder.values(), vec![2, 3]);
    assert!(recorder.is_completed());
}

#[tokio::test]
async fn test_iif_resolved_deferred_branch_emits_once() -> anyhow::Result<()> {
    // Arrange
    let source = iif(|| true, DeferredValue::resolved(42));
    let recorder = Recorder::<i32>::new();

    // Act
    source.subscribe(recorder.clone());

    // Assert
    assert!(recorder.wait_for_terminal(1000).await);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(42), Notification::Complete]
    );

    Ok(())
}

#[tokio::test]
async fn test_iif_rejected_deferred_else_branch_errors() -> anyhow::Result<()> {
    // Arrange
    let source = iif(|| false, of(['a'])).or_else(DeferredValue::rejected(42));
    let recorder = Recorder::<char>::new();

    // Act
    source.subscribe(recorder.clone());

    // Assert
    assert!(recorder.wait_for_terminal(1000).await);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(ConfluxError::rejected(42))]
    );
    assert_eq!(
        recorder.error().and_then(|e| e.rejection_reason().map(str::to_owned)),
        Some("42".to_string())
    );

    Ok(())
}

#[test]
fn test_predicate_not_evaluated_at_construction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let _source = iif(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        },
        of([1]),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_each_subscription_reevaluates_predicate() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = iif(
        move || counter.fetch_add(1, Ordering::SeqCst) % 2 == 0,
        of(["even"]),
    )
    .or_else(of(["odd"]));

    // Act
    let first = Recorder::<&str>::new();
    let second = Recorder::<&str>::new();
    let third = Recorder::<&str>::new();
    source.subscribe(first.clone());
    source.subscribe(second.clone());
    source.clone().subscribe(third.clone());

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(first.values(), vec!["even"]);
    assert_eq!(second.values(), vec!["odd"]);
    assert_eq!(third.values(), vec!["even"]);
}

#[test]
fn test_predicate_reads_state_at_subscription_time() {
    let enabled = Arc::new(AtomicBool::new(false));
    let flag = enabled.clone();
    let source = iif(move || flag.load(Ordering::SeqCst), of([1]));

    let before = Recorder::<i32>::new();
    source.subscribe(before.clone());
    enabled.store(true, Ordering::SeqCst);
    let after = Recorder::<i32>::new();
    source.subscribe(after.clone());

    assert!(before.values().is_empty());
    assert!(before.is_completed());
    assert_eq!(after.values(), vec![1]);
}

#[test]
fn test_branch_errors_pass_through() {
    let source = iif(|| true, throw_error::<i32>("boom")).or_else(empty());
    let recorder = Recorder::<i32>::new();

    source.subscribe(recorder.clone());

    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(ConfluxError::stream_error("boom"))]
    );
}

#[test]
fn test_nested_conditional_sources() {
    let inner = iif(|| false, of([1])).or_else(of([2]));
    let outer = iif(|| true, inner).or_else(of([3]));
    let recorder = Recorder::<i32>::new();

    outer.subscribe(recorder.clone());

    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn test_dispose_propagates_to_native_branch() {
    // Arrange
    let subject = Subject::<i32>::new();
    let source = iif(|| true, subject.clone());
    let recorder = Recorder::<i32>::new();

    // Act
    let teardown = source.subscribe(recorder.clone());
    subject.next(1).unwrap();
    teardown.dispose();
    subject.next(2).unwrap();

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(subject.subscriber_count(), 0);
    assert!(!recorder.is_terminated());
}

#[test]
fn test_subscriptions_are_independent() {
    let subject = Subject::<i32>::new();
    let source = iif(|| true, subject.clone());
    let first = Recorder::<i32>::new();
    let second = Recorder::<i32>::new();

    let first_teardown = source.subscribe(first.clone());
    source.subscribe(second.clone());
    first_teardown.dispose();
    subject.next(7).unwrap();

    assert!(first.values().is_empty());
    assert_eq!(second.values(), vec![7]);
}

#[tokio::test]
async fn test_iif_rejected_deferred_then_branch_errors() -> anyhow::Result<()> {
    // Arrange
    let source = iif(|| true, DeferredValue::<i32>::rejected(42)).or_else(of([1]));
    let recorder = Recorder::<i32>::new();

    // Act
    source.subscribe(recorder.clone());

    // Assert
    assert!(recorder.wait_for_terminal(1000).await);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(ConfluxError::rejected(42))]
    );
    assert!(matches!(
        recorder.error(),
        Some(ConfluxError::Rejected { ref reason }) if reason == "42"
    ));
    assert!(recorder.values().is_empty());
    assert_eq!(recorder.terminal_count(), 1);

    Ok(())
}

/// Completes the subject it is attached to when it receives a value.
struct CompleteOnNext(Subject<i32>);

impl Subscriber<i32> for CompleteOnNext {
    fn on_next(&self, _value: i32) {
        let _ = self.0.complete();
    }

    fn on_error(&self, _error: ConfluxError) {}

    fn on_complete(&self) {}
}

#[test]
fn test_subject_branch_gets_nothing_after_completion() {
    // Arrange
    let subject = Subject::<i32>::new();
    subject.subscribe(Arc::new(CompleteOnNext(subject.clone())));
    let recorder = Recorder::<i32>::new();
    iif(|| true, subject.clone()).subscribe(recorder.clone());

    // Act
    subject.next(1).unwrap();

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Complete]);
    assert_eq!(recorder.terminal_count(), 1);
}

/// A source defined outside the crate, emitting a single value.
struct Single(i32);

impl Source<i32> for Single {
    fn subscribe(&self, subscriber: SharedSubscriber<i32>) -> Teardown {
        subscriber.on_next(self.0);
        subscriber.on_complete();
        Teardown::inert()
    }
}

#[test]
fn test_boxed_custom_source_as_branch() {
    let then_branch: BoxSource<i32> = Arc::new(Single(5));
    let else_branch: BoxSource<i32> = Arc::new(Single(6));
    let source = iif(|| false, then_branch).or_else(else_branch);
    let recorder = Recorder::<i32>::new();

    source.subscribe(recorder.clone());

    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(6), Notification::Complete]
    );
}
