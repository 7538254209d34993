// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::IntoSource;
use conflux_core::{BoxSource, ConfluxError, SharedSubscriber, Source, Teardown};
use core::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn() -> Result<bool, ConfluxError> + Send + Sync>;

/// A source that picks one of two branches each time it is subscribed.
///
/// Created by [`iif`] or [`try_iif`]. Cloning shares the predicate and both branches.
///
/// See the [module-level documentation](crate::iif) for examples.
pub struct ConditionalSource<T> {
    predicate: Predicate,
    then_branch: BoxSource<T>,
    else_branch: Option<BoxSource<T>>,
}

/// Select `then_branch` whenever `predicate` returns `true` at subscription time.
///
/// Without [`or_else`](ConditionalSource::or_else), a `false` predicate completes the
/// subscriber immediately.
pub fn iif<T, P, B>(predicate: P, then_branch: B) -> ConditionalSource<T>
where
    T: 'static,
    P: Fn() -> bool + Send + Sync + 'static,
    B: IntoSource<T>,
{
    try_iif(move || Ok::<_, ConfluxError>(predicate()), then_branch)
}

/// Like [`iif`], with a predicate that may fail.
///
/// A failing predicate errors the subscriber with the returned error, converted into
/// [`ConfluxError`], and neither branch is subscribed.
pub fn try_iif<T, P, E, B>(predicate: P, then_branch: B) -> ConditionalSource<T>
where
    T: 'static,
    P: Fn() -> Result<bool, E> + Send + Sync + 'static,
    E: Into<ConfluxError>,
    B: IntoSource<T>,
{
    ConditionalSource {
        predicate: Arc::new(move || predicate().map_err(Into::<ConfluxError>::into)),
        then_branch: then_branch.into_source(),
        else_branch: None,
    }
}

impl<T: 'static> ConditionalSource<T> {
    /// Attach the branch used when the predicate returns `false`.
    #[must_use]
    pub fn or_else<B>(mut self, else_branch: B) -> Self
    where
        B: IntoSource<T>,
    {
        self.else_branch = Some(else_branch.into_source());
        self
    }

    pub fn has_else(&self) -> bool {
        self.else_branch.is_some()
    }
}

impl<T: 'static> Source<T> for ConditionalSource<T> {
    fn subscribe(&self, subscriber: SharedSubscriber<T>) -> Teardown {
        let condition = match (self.predicate)() {
            Ok(condition) => condition,
            Err(error) => {
                warn!("iif: predicate failed: {}", error);
                subscriber.on_error(error);
                return Teardown::inert();
            }
        };

        let branch = if condition {
            Some(&self.then_branch)
        } else {
            self.else_branch.as_ref()
        };

        match branch {
            Some(branch) => branch.subscribe(subscriber),
            None => {
                subscriber.on_complete();
                Teardown::inert()
            }
        }
    }
}

impl<T> Clone for ConditionalSource<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            then_branch: self.then_branch.clone(),
            else_branch: self.else_branch.clone(),
        }
    }
}

impl<T> fmt::Debug for ConditionalSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalSource")
            .field("has_else", &self.else_branch.is_some())
            .finish_non_exhaustive()
    }
}
