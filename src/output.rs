//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Preview of the project structure after an upgrade
#[derive(Debug, Serialize)]
pub struct UpgradePreview {
    /// The skill id being migrated
    pub skill_id: String,
    /// Whether this is a hosted skill
    pub hosted: bool,
    /// Entries in the post-upgrade project tree
    pub entries: Vec<PreviewEntry>,
}

/// One entry of the post-upgrade project tree
#[derive(Debug, Serialize)]
pub struct PreviewEntry {
    /// Path relative to the project root (trailing `/` for directories)
    pub path: String,
    /// What ends up there
    pub note: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl UpgradePreview {
    /// Render the preview based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let kind = if self.hosted { "hosted skill" } else { "skill" };
        println!("Preview of the v2 structure for {} ({kind}):\n", self.skill_id.bold());

        let width = self.entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
        for entry in &self.entries {
            let padded = format!("{:<width$}", entry.path);
            println!("  {}  {}", padded.cyan(), entry.note.dimmed());
        }
        println!();
        println!("Everything currently in the project moves into legacy/ first.");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
