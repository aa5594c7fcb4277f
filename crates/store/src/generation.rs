//! Request generations for fetchable collections.
//!
//! Operations are not cancelled or de-duplicated; two overlapping fetches
//! of the same collection both settle. To keep the *newer* request
//! authoritative regardless of response arrival order, each collection
//! carries a generation counter: a fetch captures the generation when it
//! begins, and a settling response whose generation is no longer current
//! is discarded.

/// Token captured when a fetch begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Per-collection generation counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    /// Begin a new fetch: advance the counter and return its token.
    /// Any earlier in-flight fetch for this collection is now stale.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    /// Whether the given token still identifies the newest fetch.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
