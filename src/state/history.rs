//! Fixed-capacity history ring.
//!
//! Keeps the most recent entries in insertion order. Once the ring is full,
//! pushing a new entry evicts the oldest one.

use std::collections::VecDeque;

/// A bounded, ordered sequence where the oldest entries are dropped first.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRing<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryRing<T> {
    /// Return a new empty ring holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "HistoryRing capacity must be greater than 0");
        HistoryRing {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, returning the evicted oldest entry if the ring was
    /// already full.
    ///
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Remove and return the newest entry.
    ///
    pub fn pop_back(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Replace the newest entry, or push if the ring is empty. Returns the
    /// replaced entry.
    ///
    pub fn replace_last(&mut self, entry: T) -> Option<T> {
        match self.entries.back_mut() {
            Some(last) => Some(std::mem::replace(last, entry)),
            None => {
                self.entries.push_back(entry);
                None
            }
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to newest.
    ///
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.iter().cloned().collect()
    }
}
