//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! ==================================================
//! Processing shumiao.jpg...
//! ==================================================
//! Original image size: (1024, 1024)
//! Generated: res/drawable-ldpi/shumiao.png (36x36)
//! Generated: res/drawable-mdpi/shumiao.png (48x48)
//! ...
//!
//! ==================================================
//! All icons generated successfully!
//! ==================================================
//! ```
//!
//! A source that cannot be processed prints `Error: <message>` in place of
//! its remaining lines.
//!
//! ## Check
//!
//! ```text
//! Sources
//! 001 shumiao.jpg → shumiao
//!     Source: logo/shumiao.jpg
//! 002 zhigeyun.jpg → zhigeyun (missing)
//!     Source: logo/zhigeyun.jpg
//!
//! Densities
//!     ldpi: 36x36 → drawable-ldpi/
//!     ...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::config::GeneratorConfig;
use crate::generate::{GenerateEvent, GenerateReport};
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Three-line banner around a message.
pub fn format_banner(message: &str) -> Vec<String> {
    vec![rule(), message.to_string(), rule()]
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Generate
// ============================================================================

/// Format one progress event.
///
/// `first` is true for the first source of a run; every later banner is
/// preceded by a blank line.
pub fn format_event(event: &GenerateEvent, first: bool) -> Vec<String> {
    match event {
        GenerateEvent::SourceStarted { source_path } => {
            let mut lines = Vec::new();
            if !first {
                lines.push(String::new());
            }
            lines.extend(format_banner(&format!(
                "Processing {}...",
                file_label(source_path)
            )));
            lines
        }
        GenerateEvent::SourceOpened { original } => {
            vec![format!(
                "Original image size: ({}, {})",
                original.width, original.height
            )]
        }
        GenerateEvent::IconGenerated { path, size } => {
            vec![format!("Generated: {} ({}x{})", path.display(), size, size)]
        }
        GenerateEvent::SourceFailed { message } => vec![format!("Error: {}", message)],
    }
}

/// Final summary. Without `strict` the run always ends with the success
/// banner; failures were already printed inline.
pub fn format_summary(report: &GenerateReport, strict: bool) -> Vec<String> {
    let mut lines = vec![String::new()];
    if strict && !report.all_succeeded() {
        let failed: Vec<String> = report.failed().map(|o| o.base_name.clone()).collect();
        lines.extend(format_banner(&format!(
            "{} of {} sources failed: {}",
            failed.len(),
            report.outcomes.len(),
            failed.join(", ")
        )));
    } else {
        lines.extend(format_banner("All icons generated successfully!"));
    }
    lines
}

pub fn print_summary(report: &GenerateReport, strict: bool) {
    for line in format_summary(report, strict) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the resolved configuration without touching the output tree.
pub fn format_check_output(config: &GeneratorConfig) -> Vec<String> {
    let mut lines = vec!["Sources".to_string()];

    for (i, source) in config.sources.iter().enumerate() {
        let path = config.source_path(source);
        let status = if path.is_file() { "" } else { " (missing)" };
        lines.push(format!(
            "{} {} \u{2192} {}{}",
            format_index(i + 1),
            source.file.display(),
            source.base_name(),
            status
        ));
        lines.push(format!("    Source: {}", path.display()));
    }

    lines.push(String::new());
    lines.push("Densities".to_string());
    for spec in &config.densities {
        lines.push(format!(
            "    {}: {}x{} \u{2192} {}/",
            spec.name,
            spec.size,
            spec.size,
            spec.folder_name()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Output: {}", config.output_root().display()));
    lines
}

pub fn print_check_output(config: &GeneratorConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}
