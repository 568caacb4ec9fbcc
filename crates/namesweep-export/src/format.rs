//! Export document formatting.

use crate::error::Result;
use namesweep_core::FoundAccount;
use std::fmt::Write as _;

/// Title banner for the plain-text export.
const TEXT_TITLE: &str = "NameSweep Search Results";

/// Supported export document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON array of `{name, url}` objects
    Json,
    /// CSV with a `Platform,URL` header and quoted fields
    Csv,
    /// Plain text with a title banner and `Name: URL` lines
    Text,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }

    /// Format a result list into a document of this format.
    pub fn format(&self, results: &[FoundAccount]) -> Result<String> {
        match self {
            Self::Json => to_json(results),
            Self::Csv => Ok(to_csv(results)),
            Self::Text => Ok(to_text(results)),
        }
    }
}

/// Format results as a pretty-printed JSON array of `{name, url}` objects.
///
/// Round-trips through `serde_json` to a sequence identical in order and
/// content to the in-memory result list.
pub fn to_json(results: &[FoundAccount]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Format results as CSV: a `Platform,URL` header followed by one quoted
/// data line per result (`len + 1` lines in total).
///
/// Embedded double quotes are doubled per RFC 4180.
#[must_use]
pub fn to_csv(results: &[FoundAccount]) -> String {
    let mut csv = String::from("Platform,URL\n");

    for result in results {
        let _ = writeln!(
            csv,
            "\"{}\",\"{}\"",
            csv_escape(result.name.as_str()),
            csv_escape(&result.url)
        );
    }

    csv
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

/// Format results as plain text: a title banner, a `=` rule, a blank line,
/// then one `Name: URL` line per result.
#[must_use]
pub fn to_text(results: &[FoundAccount]) -> String {
    let mut txt = format!("{TEXT_TITLE}\n{}\n\n", "=".repeat(50));

    for result in results {
        let _ = writeln!(txt, "{}: {}", result.name, result.url);
    }

    txt
}

/// Format results as a clipboard text blob: bare `Name: URL` lines.
#[must_use]
pub fn to_clipboard_text(results: &[FoundAccount]) -> String {
    let mut text = String::new();

    for result in results {
        let _ = writeln!(text, "{}: {}", result.name, result.url);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use namesweep_core::PlatformName;

    fn sample_results() -> Vec<FoundAccount> {
        vec![
            FoundAccount {
                name: PlatformName::new("GitHub").expect("valid name"),
                url: "https://github.com/alice".to_string(),
            },
            FoundAccount {
                name: PlatformName::new("Reddit").expect("valid name"),
                url: "https://reddit.com/u/alice".to_string(),
            },
        ]
    }

    #[test]
    fn test_json_roundtrip() {
        let results = sample_results();
        let json = to_json(&results).expect("serialize results");

        let parsed: Vec<FoundAccount> = serde_json::from_str(&json).expect("parse exported JSON");
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_json_empty() {
        let json = to_json(&[]).expect("serialize empty results");
        let parsed: Vec<FoundAccount> = serde_json::from_str(&json).expect("parse exported JSON");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_csv_line_count_and_format() {
        let results = sample_results();
        let csv = to_csv(&results);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), results.len() + 1);
        assert_eq!(lines[0], "Platform,URL");
        assert_eq!(lines[1], "\"GitHub\",\"https://github.com/alice\"");
        assert_eq!(lines[2], "\"Reddit\",\"https://reddit.com/u/alice\"");
    }

    #[test]
    fn test_csv_empty_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "Platform,URL\n");
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let results = vec![FoundAccount {
            name: PlatformName::new("We\"ird").expect("valid name"),
            url: "https://example.com/alice".to_string(),
        }];

        let csv = to_csv(&results);
        assert!(csv.contains("\"We\"\"ird\",\"https://example.com/alice\""));
    }

    #[test]
    fn test_text_banner_and_lines() {
        let txt = to_text(&sample_results());

        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "NameSweep Search Results");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "GitHub: https://github.com/alice");
        assert_eq!(lines[4], "Reddit: https://reddit.com/u/alice");
    }

    #[test]
    fn test_clipboard_text() {
        let text = to_clipboard_text(&sample_results());
        assert_eq!(
            text,
            "GitHub: https://github.com/alice\nReddit: https://reddit.com/u/alice\n"
        );
    }

    #[test]
    fn test_format_dispatch() {
        let results = sample_results();

        assert!(ExportFormat::Json
            .format(&results)
            .expect("format json")
            .starts_with('['));
        assert!(ExportFormat::Csv
            .format(&results)
            .expect("format csv")
            .starts_with("Platform,URL"));
        assert!(ExportFormat::Text
            .format(&results)
            .expect("format text")
            .starts_with("NameSweep Search Results"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Text.extension(), "txt");
    }
}
