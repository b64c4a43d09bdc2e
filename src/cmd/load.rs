// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `check` and `load` commands.
//!
//! ```text
//! check  scan() --> keys + malformed lines, nothing applied
//! load   LoadOutcome --> LoadSummary --> text | JSON
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load::{CheckArgs, LoadArgs};
use crate::dotenv::{self, LoadOptions, LoadOutcome, ScanReport};
use crate::error::Result;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if the env file is missing, unreadable or not valid
/// text, or if the JSON report cannot be written.
pub fn run_check_command(args: &CheckArgs, options: &LoadOptions) -> Result<()> {
    let report = dotenv::scan(options)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_scan_report(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Run the load command on an outcome already produced by `main`.
///
/// # Errors
///
/// Returns an error if the JSON report cannot be written.
pub fn run_load_command(args: &LoadArgs, outcome: &LoadOutcome) -> Result<()> {
    let summary = LoadSummary::from_outcome(outcome);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in summary.format() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Format a scan report, one declaration or malformed line per row.
#[must_use]
pub fn format_scan_report(report: &ScanReport) -> Vec<String> {
    let mut rows: Vec<(usize, String)> = report
        .keys
        .iter()
        .map(|k| {
            let note = if k.duplicate { "  (duplicate, ignored)" } else { "" };
            (k.line, format!("{}{note}", k.key))
        })
        .chain(
            report
                .malformed
                .iter()
                .map(|&line| (line, "<malformed>".to_string())),
        )
        .collect();
    rows.sort_by_key(|(line, _)| *line);

    let mut lines = vec![format!(
        "{}: {} declarations, {} malformed{}",
        report.path.display(),
        report.keys.len(),
        report.malformed.len(),
        lossy_note(report.lossy)
    )];
    lines.extend(rows.into_iter().map(|(line, text)| format!("{line:>5}  {text}")));
    lines
}

/// Which [`LoadOutcome`] variant a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Loaded,
    Missing,
    Failed,
}

/// Serializable view of a [`LoadOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub applied_count: usize,
    /// Names are only known for a completed load.
    pub applied: Vec<String>,
    pub kept: Vec<String>,
    pub malformed: Vec<usize>,
    /// Invalid bytes in the file were replaced with U+FFFD.
    pub lossy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadSummary {
    #[must_use]
    pub fn from_outcome(outcome: &LoadOutcome) -> Self {
        let base = Self {
            status: LoadStatus::Loaded,
            path: outcome.path().map(std::path::Path::to_path_buf),
            applied_count: outcome.applied_count(),
            applied: Vec::new(),
            kept: Vec::new(),
            malformed: Vec::new(),
            lossy: false,
            error: None,
        };
        match outcome {
            LoadOutcome::Loaded(report) => Self {
                applied: report.applied.clone(),
                kept: report.kept.clone(),
                malformed: report.malformed.clone(),
                lossy: report.lossy,
                ..base
            },
            LoadOutcome::Missing { .. } => Self {
                status: LoadStatus::Missing,
                ..base
            },
            LoadOutcome::Failed { error, .. } => Self {
                status: LoadStatus::Failed,
                error: Some(error.to_string()),
                ..base
            },
        }
    }

    /// Human-readable rendering.
    #[must_use]
    pub fn format(&self) -> Vec<String> {
        let path = self
            .path
            .as_ref()
            .map_or_else(|| "<unresolved>".to_string(), |p| p.display().to_string());

        let mut lines = vec![match self.status {
            LoadStatus::Missing => format!("{path}: not found, nothing loaded"),
            LoadStatus::Failed => format!(
                "{path}: failed after {} variables: {}",
                self.applied_count,
                self.error.as_deref().unwrap_or_default()
            ),
            LoadStatus::Loaded => format!(
                "{path}: {} set, {} kept, {} malformed{}",
                self.applied.len(),
                self.kept.len(),
                self.malformed.len(),
                lossy_note(self.lossy)
            ),
        }];
        lines.extend(self.applied.iter().map(|key| format!("  + {key}")));
        lines.extend(self.kept.iter().map(|key| format!("  = {key}")));
        lines
    }
}

const fn lossy_note(lossy: bool) -> &'static str {
    if lossy { ", invalid bytes replaced" } else { "" }
}
