//! Writing export documents to disk.

use crate::error::Result;
use crate::format::ExportFormat;
use namesweep_core::FoundAccount;
use std::fs;
use std::path::Path;
use tracing::info;

/// Format the result list and write it to a file.
///
/// The CLI counterpart of the browser's download helper: the document is
/// produced in full, then written in one shot.
pub fn write_export(path: &Path, format: ExportFormat, results: &[FoundAccount]) -> Result<()> {
    let document = format.format(results)?;
    fs::write(path, document)?;

    info!(
        path = %path.display(),
        format = ?format,
        results = results.len(),
        "wrote export"
    );

    Ok(())
}
