//! Progress events emitted by the orchestrator during a scan.

use namesweep_core::{FoundAccount, PlatformName};
use serde::Serialize;

/// One progress event, emitted strictly in catalog order.
///
/// The payloads are snapshots: presentation layers never share mutable
/// state with the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScanEvent {
    /// A probe for this platform is about to be issued
    #[serde(rename_all = "camelCase")]
    Checking {
        /// Platform display name
        platform_name: PlatformName,
    },
    /// Counters after a probe completed (emitted for every probe)
    #[serde(rename_all = "camelCase")]
    Counters {
        /// Platforms probed so far
        scanned_count: usize,
        /// Positive hits so far
        found_count: usize,
        /// Usable platforms in the catalog
        total_platforms: usize,
    },
    /// The result list grew (emitted only on positive hits)
    #[serde(rename_all = "camelCase")]
    ResultsUpdated {
        /// All positive hits so far, in catalog order
        results: Vec<FoundAccount>,
        /// Whether the presentation should show every result
        reveal_all: bool,
    },
    /// Terminal event: the scan consumed the entire catalog
    Done,
}

/// Consumer of progress events.
///
/// Implemented for closures so callers can pass `|event| ...` directly.
pub trait ProgressSink: Send {
    /// Handle one progress event.
    fn on_event(&mut self, event: ScanEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(ScanEvent) + Send,
{
    fn on_event(&mut self, event: ScanEvent) {
        self(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_event(&mut self, _event: ScanEvent) {}
}
