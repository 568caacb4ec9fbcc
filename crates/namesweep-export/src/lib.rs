//! NameSweep Export - Result formatting collaborators.
//!
//! Pure formatting over a finalized result list: JSON, CSV, plain text with
//! a title banner, and a clipboard-ready text blob, plus a helper to write
//! any of these to a file. These are thin consumers of the scan's final
//! result sequence and hold no scan state of their own.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod format;
pub mod writer;

// Re-export commonly used types
pub use error::{ExportError, Result};
pub use format::{to_clipboard_text, to_csv, to_json, to_text, ExportFormat};
pub use writer::write_export;
