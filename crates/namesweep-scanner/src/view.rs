//! Partial reveal of the accumulated result list.

use namesweep_core::FoundAccount;

/// How many results are shown before the "show all" affordance kicks in.
pub const REVEAL_LIMIT: usize = 6;

/// Presentation-side view over the result list.
///
/// A thin consumer of orchestrator snapshots: initially only the first
/// [`REVEAL_LIMIT`] results are visible, with the remainder behind a
/// "show all" affordance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultView {
    reveal_all: bool,
}

impl ResultView {
    /// Create a view with the partial reveal active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view that shows everything from the start.
    #[must_use]
    pub fn revealed() -> Self {
        Self { reveal_all: true }
    }

    /// Reveal all remaining results.
    pub fn reveal_all(&mut self) {
        self.reveal_all = true;
    }

    /// Whether the view is fully revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal_all
    }

    /// The currently visible slice of the result list.
    #[must_use]
    pub fn visible<'a>(&self, results: &'a [FoundAccount]) -> &'a [FoundAccount] {
        if self.reveal_all {
            results
        } else {
            &results[..results.len().min(REVEAL_LIMIT)]
        }
    }

    /// How many results the "show all" affordance would reveal.
    #[must_use]
    pub fn hidden_count(&self, results: &[FoundAccount]) -> usize {
        if self.reveal_all {
            0
        } else {
            results.len().saturating_sub(REVEAL_LIMIT)
        }
    }
}
