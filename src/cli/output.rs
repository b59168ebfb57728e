//! Output formatting utilities

use crate::application::BatchOutcome;
use crate::infrastructure::ContextEntry;

/// Format batch outcomes for display
pub fn format_batch_list(outcomes: &[BatchOutcome]) -> String {
    if outcomes.is_empty() {
        return "No context files found".to_string();
    }

    let mut output = String::new();
    for outcome in outcomes {
        output.push_str(&format!(
            "{:<9} {:>2} tags  {} -> {}\n",
            outcome.kind.as_str(),
            outcome.tag_count,
            outcome.source,
            outcome.output
        ));
    }
    output
}

/// Format discovered context entries for display
pub fn format_context_list(entries: &[ContextEntry]) -> String {
    if entries.is_empty() {
        return "No context files found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{:<9} {}\n", entry.kind.as_str(), entry.filename));
    }
    output
}
