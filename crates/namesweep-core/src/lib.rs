//! NameSweep Core - Foundation crate for the NameSweep username scanner.
//!
//! This crate provides shared types, error handling, and configuration
//! management that the other NameSweep crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`Username`, `PlatformName`, `ScanId`, `Timestamp`)
//!
//! # Example
//!
//! ```rust
//! use namesweep_core::{AppConfig, Username};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let username = Username::new("alice")?;
//! assert_eq!(username.as_str(), "alice");
//! assert_eq!(config.scanning.probe_delay_ms, 50);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, CatalogConfig, ScanningConfig};
pub use error::{ConfigError, ConfigResult, NamesweepError, Result};
pub use types::{FoundAccount, PlatformName, ScanId, Timestamp, Username};
