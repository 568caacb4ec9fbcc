//! NameSweep Catalog - Platform catalog loading and filtering.
//!
//! This crate turns a remote (or local) JSON document mapping platform names
//! to descriptors into a validated, insertion-ordered [`Catalog`]. Entries
//! whose key starts with the reserved `$` metadata prefix, whose value is not
//! an object, or whose object has no usable `url` template are filtered out.
//!
//! Loading fails soft: [`CatalogLoader::fetch_or_empty`] turns any network or
//! parse error into an empty catalog, which callers treat as "zero platforms
//! to scan" rather than a fatal error.
//!
//! # Example
//!
//! ```rust,ignore
//! use namesweep_catalog::CatalogLoader;
//! use namesweep_core::AppConfig;
//!
//! let config = AppConfig::default();
//! let loader = CatalogLoader::new(&config)?;
//! let catalog = loader.fetch_or_empty().await;
//! println!("{} platforms to scan", catalog.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod loader;

// Re-export commonly used types
pub use catalog::Catalog;
pub use descriptor::{PlatformDescriptor, PLACEHOLDER};
pub use error::{CatalogError, Result};
pub use loader::{CatalogLoader, CatalogSource};
