//! Shared CLI helpers: response and error printing.

use colored::Colorize;

/// Print the final answer to stdout, nothing else.
pub fn print_response(response: &str) {
    println!("{response}");
}

/// Render a fatal error with its cause chain for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{} {err:#}", "error:".red().bold())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
