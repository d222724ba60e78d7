//! CLI output formatting

use crate::core::{AttemptKind, AttemptRecord, RunSummary};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Format one attempt for display
pub fn format_attempt(record: &AttemptRecord) -> String {
    let label = match record.kind {
        AttemptKind::Initial => "initial".to_string(),
        AttemptKind::Retry(n) => format!("retry {}", n),
    };
    let status = if record.outcome.success() {
        style("PASSED").green().to_string()
    } else {
        style(format!("FAILED (exit {})", record.outcome.exit_code)).red().to_string()
    };

    format!(
        "{:<10} {} {}",
        label,
        status,
        style(format!("{}ms", record.duration_ms)).dim()
    )
}

/// Final status line for a run
pub fn format_run_result(summary: &RunSummary) -> String {
    if summary.passed() {
        let when = match summary.retry_count() {
            0 => "on the initial run".to_string(),
            1 => "after 1 retry".to_string(),
            n => format!("after {} retries", n),
        };
        format!(
            "{}{} passed {}",
            CHECK,
            style(&summary.suite).bold(),
            style(when).green()
        )
    } else {
        format!(
            "{}{} {} after {} retry attempts",
            CROSS,
            style(&summary.suite).bold(),
            style("still failing").red(),
            summary.max_retries
        )
    }
}
