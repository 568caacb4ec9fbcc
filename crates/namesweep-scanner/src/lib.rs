//! NameSweep Scanner - Sequential probing pipeline.
//!
//! This crate provides the probe executor and scan orchestrator: the
//! rate-limited, cancellable loop that iterates a platform catalog, issues
//! one network probe per platform through the CORS relay, updates the scan
//! session after each probe, and emits progress events as it goes.
//!
//! # Features
//!
//! - Strictly sequential probing in catalog order (one probe in flight)
//! - Fixed inter-probe throttle to avoid hammering the shared relay
//! - Cancellation: starting a new scan supersedes the in-flight one
//! - Tri-state probe outcomes with network failures collapsed into
//!   "absent" for behavior, kept distinct for logging
//!
//! # Example
//!
//! ```rust,ignore
//! use namesweep_scanner::{ScanOrchestrator, ScanEvent};
//! use std::sync::Arc;
//!
//! let orchestrator = ScanOrchestrator::from_config(&config)?;
//! let mut sink = |event: ScanEvent| println!("{event:?}");
//! let session = orchestrator.run_scan(username, &catalog, &mut sink).await;
//! println!("found {} accounts", session.found_count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod events;
pub mod orchestrator;
pub mod probe;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use error::{Result, ScanError};
pub use events::{ProgressSink, ScanEvent};
pub use orchestrator::ScanOrchestrator;
pub use probe::{build_profile_url, build_relay_url, ProbeExecutor, ProbeOutcome, Prober};
pub use session::{CheckState, ScanSession, ScanStatus};
pub use view::{ResultView, REVEAL_LIMIT};
