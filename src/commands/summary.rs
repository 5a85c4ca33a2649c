//! Pull summaries

use crate::rules::Outcome;

/// Summary listing every key, used after picking individual files
pub fn format_keys(outcome: &Outcome) -> String {
    let mut lines = vec![
        "\nPull completed:".to_string(),
        format!("✅ Successfully pulled: {}", outcome.success.join(", ")),
    ];
    if !outcome.skipped.is_empty() {
        lines.push(format!("⏭️ Skipped: {}", outcome.skipped.join(", ")));
    }
    if !outcome.failed.is_empty() {
        lines.push(format!("❌ Failed: {}", outcome.failed.join(", ")));
    }
    lines.join("\n")
}

/// Summary with counts only, used after pulling whole modules
pub fn format_counts(outcome: &Outcome) -> String {
    let mut lines = vec![
        "\nPull completed:".to_string(),
        format!("✅ Successfully pulled: {} files", outcome.success.len()),
    ];
    if !outcome.skipped.is_empty() {
        lines.push(format!("⏭️ Skipped: {} files", outcome.skipped.len()));
    }
    if !outcome.failed.is_empty() {
        lines.push(format!("❌ Failed: {} files", outcome.failed.len()));
    }
    lines.join("\n")
}
