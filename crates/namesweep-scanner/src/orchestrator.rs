//! Scan orchestrator: the sequential, throttled, cancellable probe loop.

use crate::error::Result;
use crate::events::{ProgressSink, ScanEvent};
use crate::probe::{ProbeExecutor, ProbeOutcome, Prober};
use crate::session::ScanSession;
use namesweep_catalog::Catalog;
use namesweep_core::{AppConfig, Username};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Default delay between probes, matching the reference behavior.
const DEFAULT_PROBE_DELAY_MS: u64 = 50;

/// Drives the sequential probe loop over a catalog.
///
/// Probes execute strictly one at a time: the loop suspends on each probe
/// and on the fixed inter-probe delay. This trades total scan latency for
/// simplicity and for not overwhelming the shared relay with concurrent
/// requests.
///
/// Only one scan may be active per orchestrator. Starting a new scan
/// cancels the in-flight one: the superseded loop observes its token at the
/// next suspension point and returns without further state mutation or
/// event emission.
pub struct ScanOrchestrator {
    /// Probe seam; swapped for a scripted prober in tests
    prober: Arc<dyn Prober>,
    /// Fixed throttle after each probe
    probe_delay: Duration,
    /// Whether results-updated events ask the presentation to reveal everything
    reveal_all: bool,
    /// Token of the in-flight scan, cancelled when a new scan starts
    current_scan: Mutex<Option<CancellationToken>>,
}

impl ScanOrchestrator {
    /// Create a new orchestrator over the given prober.
    #[must_use]
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            prober,
            probe_delay: Duration::from_millis(DEFAULT_PROBE_DELAY_MS),
            reveal_all: false,
            current_scan: Mutex::new(None),
        }
    }

    /// Create an orchestrator with a relay-backed [`ProbeExecutor`] built
    /// from the configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let executor = ProbeExecutor::new(config)?;
        Ok(Self::new(Arc::new(executor))
            .with_probe_delay(Duration::from_millis(config.scanning.probe_delay_ms)))
    }

    /// Set the inter-probe delay.
    #[must_use]
    pub fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.probe_delay = delay;
        self
    }

    /// Set whether emitted result snapshots request full reveal.
    #[must_use]
    pub fn with_reveal_all(mut self, reveal_all: bool) -> Self {
        self.reveal_all = reveal_all;
        self
    }

    /// Install a fresh cancellation token, superseding any in-flight scan.
    fn begin_scan(&self) -> CancellationToken {
        let mut guard = self
            .current_scan
            .lock()
            .expect("acquire lock on current scan token");

        if let Some(previous) = guard.take() {
            debug!("superseding in-flight scan");
            previous.cancel();
        }

        let token = CancellationToken::new();
        *guard = Some(token.clone());
        token
    }

    /// Run one scan over the catalog in its insertion order.
    ///
    /// For each platform: emits a checking event, awaits the probe, appends
    /// positive hits and emits a results-updated event, always bumps the
    /// scanned counter and emits a counters event, then waits the fixed
    /// throttle delay. An individual probe failure never aborts the scan;
    /// once started, the loop always reaches completion unless superseded.
    ///
    /// Returns the terminal session: `Completed` with all counters final,
    /// or `Cancelled` if a newer scan took over.
    pub async fn run_scan(
        &self,
        username: Username,
        catalog: &Catalog,
        sink: &mut dyn ProgressSink,
    ) -> ScanSession {
        let token = self.begin_scan();
        let mut session = ScanSession::new(username.clone(), catalog.len());

        info!(
            scan_id = %session.id,
            username = %username,
            total_platforms = catalog.len(),
            "starting scan"
        );

        for descriptor in catalog {
            session.checking(descriptor.name.clone());
            sink.on_event(ScanEvent::Checking {
                platform_name: descriptor.name.clone(),
            });

            let outcome = tokio::select! {
                () = token.cancelled() => {
                    info!(scan_id = %session.id, "scan superseded, stopping");
                    session.cancel();
                    return session;
                }
                outcome = self.prober.probe(descriptor, &username) => outcome,
            };

            match outcome {
                ProbeOutcome::Found(account) => {
                    debug!(platform = %descriptor.name, url = %account.url, "account found");
                    session.record_found(account);
                    sink.on_event(ScanEvent::ResultsUpdated {
                        results: session.results.clone(),
                        reveal_all: self.reveal_all,
                    });
                }
                ProbeOutcome::Absent => {
                    debug!(platform = %descriptor.name, "account absent");
                }
                ProbeOutcome::Failed(reason) => {
                    // Collapsed into "absent" for behavior; the cause is
                    // logged for observability only.
                    debug!(platform = %descriptor.name, reason = %reason, "probe failed");
                }
            }

            session.record_scanned();
            sink.on_event(ScanEvent::Counters {
                scanned_count: session.scanned_count,
                found_count: session.found_count,
                total_platforms: session.total_platforms,
            });

            tokio::select! {
                () = token.cancelled() => {
                    info!(scan_id = %session.id, "scan superseded during throttle, stopping");
                    session.cancel();
                    return session;
                }
                () = tokio::time::sleep(self.probe_delay) => {}
            }
        }

        session.complete();
        sink.on_event(ScanEvent::Done);

        info!(
            scan_id = %session.id,
            scanned = session.scanned_count,
            found = session.found_count,
            "scan complete"
        );

        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_delay_matches_reference() {
        const _: () = assert!(DEFAULT_PROBE_DELAY_MS == 50);
    }
}
