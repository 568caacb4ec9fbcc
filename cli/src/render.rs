//! Banner and final result rendering.

use colored::Colorize;
use namesweep_scanner::{ResultView, ScanSession};

/// Print the startup banner.
pub fn print_banner() {
    let banner = r"
  _   _                     ____
 | \ | | __ _ _ __ ___   __/ ___|_      _____  ___ _ __
 |  \| |/ _` | '_ ` _ \ / _ \___ \ \ /\ / / _ \/ _ \ '_ \
 | |\  | (_| | | | | | |  __/___) \ V  V /  __/  __/ |_) |
 |_| \_|\__,_|_| |_| |_|\___|____/ \_/\_/ \___|\___| .__/
                                                   |_|
";
    println!("{}", banner.green());
}

/// Print the final result list with the partial-reveal view applied.
pub fn print_results(session: &ScanSession, view: ResultView) {
    if session.results.is_empty() {
        println!(
            "{}",
            "No accounts found. The username may not exist on these platforms.".red()
        );
        return;
    }

    println!();
    for result in view.visible(&session.results) {
        println!(
            "{} {}: {}",
            "[+]".green(),
            result.name.as_str().green().bold(),
            result.url
        );
    }

    let hidden = view.hidden_count(&session.results);
    if hidden > 0 {
        println!(
            "\n... and {hidden} more. Re-run with {} to see all {} results.",
            "--show-all".bold(),
            session.results.len()
        );
    }

    println!(
        "\nFound {} of {} platforms scanned.",
        session.found_count.to_string().green().bold(),
        session.scanned_count
    );
}
