// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronization primitive shared by every conflux crate.
//!
//! `parking_lot::Mutex` never poisons, so subscription state stays usable after a
//! subscriber callback panics on another thread.

pub use parking_lot::{Mutex, MutexGuard};
