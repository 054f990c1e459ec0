// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded, most-recent-first operation log.

use alloc::collections::VecDeque;
use alloc::string::String;

/// A bounded record of human-readable operation descriptions.
///
/// Entries are kept most recent first; pushing beyond the capacity drops
/// the oldest entries. The log is ephemeral presentation state, never
/// consulted by the engine.
#[derive(Clone, Debug)]
pub struct OpLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl OpLog {
    /// Default number of retained entries, matching the visualizer's log
    /// panel.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create a log retaining [`Self::DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a log retaining up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend an entry, dropping the oldest if the log is full.
    pub fn push(&mut self, entry: String) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for OpLog {
    fn default() -> Self {
        Self::new()
    }
}
