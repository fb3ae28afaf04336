//! Random index selection for shuffle
//!
//! Shuffle picks the next episode with a uniform draw over the whole queue.
//! The draw goes through [`RandomSource`] so hosts can swap the generator,
//! and tests can replay a fixed sequence.

use rand::Rng;

/// Source of uniformly distributed queue indices
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Unseeded thread-local generator
///
/// Default source for [`PlayerStore`](crate::PlayerStore).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Each value is reduced modulo the queue length, so the same sequence can
/// drive queues of any size. An empty sequence always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    /// Create a source that yields `values` in order
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}
