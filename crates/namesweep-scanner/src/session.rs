//! Mutable scan session state, owned exclusively by the orchestrator.

use namesweep_core::{FoundAccount, PlatformName, ScanId, Timestamp, Username};
use serde::Serialize;

/// Lifecycle state of a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// The scan loop is consuming the catalog
    Running,
    /// Every platform has been probed
    Completed,
    /// The scan was superseded by a newer one before finishing
    Cancelled,
}

/// What the scan is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// No probe issued yet
    Idle,
    /// A probe for this platform is in flight
    Checking(PlatformName),
    /// Terminal sentinel: the scan has finished
    Complete,
}

/// State accumulated over the lifetime of one scan invocation.
///
/// Created at scan start, mutated once per probe by the orchestrator, and
/// terminal when `scanned_count == total_platforms`. Counters are
/// monotonically non-decreasing; `found_count == results.len()` and both
/// never exceed `scanned_count`, which never exceeds `total_platforms`.
/// Presentation layers only see snapshots via progress events, so the
/// session has no concurrent writers.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSession {
    /// Unique identifier for this scan
    pub id: ScanId,
    /// The subject being searched
    pub username: Username,
    /// Number of usable platforms in the catalog
    pub total_platforms: usize,
    /// Platforms probed so far
    pub scanned_count: usize,
    /// Positive hits so far
    pub found_count: usize,
    /// Positive hits, in catalog order (append-only)
    pub results: Vec<FoundAccount>,
    /// The in-flight probe, or the terminal sentinel
    pub current: CheckState,
    /// Lifecycle state
    pub status: ScanStatus,
    /// When the scan started
    pub started_at: Timestamp,
    /// When the scan reached a terminal state
    pub completed_at: Option<Timestamp>,
}

impl ScanSession {
    /// Create a new running session for one username and catalog size.
    #[must_use]
    pub fn new(username: Username, total_platforms: usize) -> Self {
        Self {
            id: ScanId::generate(),
            username,
            total_platforms,
            scanned_count: 0,
            found_count: 0,
            results: Vec::new(),
            current: CheckState::Idle,
            status: ScanStatus::Running,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    /// Mark a platform's probe as in flight.
    pub fn checking(&mut self, platform: PlatformName) {
        self.current = CheckState::Checking(platform);
    }

    /// Append a positive hit.
    pub fn record_found(&mut self, account: FoundAccount) {
        self.results.push(account);
        self.found_count = self.results.len();
    }

    /// Count one completed probe, regardless of outcome.
    pub fn record_scanned(&mut self) {
        debug_assert!(self.scanned_count < self.total_platforms);
        self.scanned_count += 1;
    }

    /// Mark the session completed.
    pub fn complete(&mut self) {
        self.current = CheckState::Complete;
        self.status = ScanStatus::Completed;
        self.completed_at = Some(Timestamp::now());
    }

    /// Mark the session cancelled (superseded by a newer scan).
    pub fn cancel(&mut self) {
        self.status = ScanStatus::Cancelled;
        self.completed_at = Some(Timestamp::now());
    }

    /// Whether the session reached its terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == ScanStatus::Completed
    }
}
