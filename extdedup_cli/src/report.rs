//! Report rendering for text and JSON output

use anyhow::Result;
use colored::*;
use extdedup_core::{DedupPlan, DeleteMode, DeletionEvent, DeletionReport, FailedRemoval};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format enumeration
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders the phases of a run
///
/// Every method returns the text to print on stdout; an empty string prints
/// nothing.
pub trait Reporter {
    /// Keep list and delete announcement, before anything is removed
    fn plan(&mut self, plan: &DedupPlan, mode: DeleteMode) -> String;

    /// A single deletion outcome, as it happens
    fn event(&mut self, event: &DeletionEvent<'_>) -> String;

    /// Closing summary
    fn finish(&mut self, plan: &DedupPlan, report: &DeletionReport, mode: DeleteMode)
    -> Result<String>;
}

/// Create a reporter for the chosen format
pub fn create_reporter(format: OutputFormat, use_color: bool, verbose: bool) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(use_color, verbose)),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}

/// Human-readable report
pub struct TextReporter {
    use_color: bool,
    verbose: bool,
}

impl TextReporter {
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Reporter for TextReporter {
    fn plan(&mut self, plan: &DedupPlan, mode: DeleteMode) -> String {
        let mut output = String::new();

        let keep_label = self.colorize("Files to keep:", |s| s.bold().green());
        output.push_str(&format!("{keep_label} {}\n", plan.keep_count()));
        if self.verbose {
            for path in &plan.keep {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }

        if mode == DeleteMode::DryRun {
            let label = self.colorize("Dry run:", |s| s.bold().yellow());
            output.push_str(&format!(
                "{label} {} file(s) would be deleted\n",
                plan.delete_count()
            ));
        }

        output
    }

    fn event(&mut self, event: &DeletionEvent<'_>) -> String {
        if !self.verbose {
            return String::new();
        }

        match event {
            DeletionEvent::WouldRemove(path) => format!("  {}\n", path.display()),
            DeletionEvent::Removed(path) => {
                format!("{} {}\n", self.colorize("Deleted:", |s| s.red()), path.display())
            }
            DeletionEvent::Missing(path) => format!(
                "{} {}\n",
                self.colorize("Already gone, skipped:", |s| s.dimmed()),
                path.display()
            ),
            // Failures are reported on stderr by the caller
            DeletionEvent::Failed(..) => String::new(),
        }
    }

    fn finish(
        &mut self,
        _plan: &DedupPlan,
        report: &DeletionReport,
        mode: DeleteMode,
    ) -> Result<String> {
        let mut output = String::new();

        if mode == DeleteMode::Live {
            output.push_str(&format!("Deleted {} file(s)", report.removed.len()));
            if !report.missing.is_empty() {
                output.push_str(&format!(", {} already gone", report.missing.len()));
            }
            if report.has_failures() {
                let failed = format!("{} failed", report.failed.len());
                output.push_str(&format!(", {}", self.colorize(&failed, |s| s.red())));
            }
            output.push('\n');
        }

        output.push('\n');
        Ok(output)
    }
}

/// Machine-readable report, printed as one pretty-printed document at the end
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonSummary<'a> {
    dry_run: bool,
    keep: &'a [PathBuf],
    delete: &'a [PathBuf],
    removed: &'a [PathBuf],
    missing: &'a [PathBuf],
    failed: &'a [FailedRemoval],
}

impl Reporter for JsonReporter {
    fn plan(&mut self, _plan: &DedupPlan, _mode: DeleteMode) -> String {
        String::new()
    }

    fn event(&mut self, _event: &DeletionEvent<'_>) -> String {
        String::new()
    }

    fn finish(
        &mut self,
        plan: &DedupPlan,
        report: &DeletionReport,
        mode: DeleteMode,
    ) -> Result<String> {
        let summary = JsonSummary {
            dry_run: mode == DeleteMode::DryRun,
            keep: &plan.keep,
            delete: &plan.delete,
            removed: &report.removed,
            missing: &report.missing,
            failed: &report.failed,
        };

        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        Ok(json)
    }
}
