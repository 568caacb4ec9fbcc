//! Terminal progress rendering driven by scan events.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use namesweep_core::Username;
use namesweep_scanner::{ProgressSink, ScanEvent};

/// Progress sink that drives an indicatif bar and prints positive hits as
/// they come in.
pub struct CliProgress {
    bar: Option<ProgressBar>,
}

impl CliProgress {
    /// Create a progress renderer for a scan over `total` platforms.
    pub fn new(username: &Username, total: usize, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        println!(
            "Checking username {} across {} platforms\n",
            username.as_str().bold(),
            total
        );

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("[{bar:40}] {pos}/{len} | Found: {prefix} | {msg}")
                .expect("valid progress template")
                .progress_chars("█░ "),
        );
        bar.set_prefix("0");

        Self { bar: Some(bar) }
    }

    /// Clear the bar once the scan has finished.
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressSink for CliProgress {
    fn on_event(&mut self, event: ScanEvent) {
        let Some(bar) = &self.bar else {
            return;
        };

        match event {
            ScanEvent::Checking { platform_name } => {
                bar.set_message(format!("Checking: {platform_name}"));
            }
            ScanEvent::Counters {
                scanned_count,
                found_count,
                ..
            } => {
                bar.set_position(scanned_count as u64);
                bar.set_prefix(found_count.to_string().green().to_string());
            }
            ScanEvent::ResultsUpdated { results, .. } => {
                if let Some(hit) = results.last() {
                    bar.println(format!(
                        "{} {}: {}",
                        "[+]".green(),
                        hit.name.as_str().green().bold(),
                        hit.url
                    ));
                }
            }
            ScanEvent::Done => {
                bar.set_message("Scan complete!".to_string());
            }
        }
    }
}
