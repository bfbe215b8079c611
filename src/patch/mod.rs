//! Regex patch jobs for the evaluation form
//!
//! Each job is an ordered list of [`RewriteRule`]s. Jobs read the whole
//! document, apply their rules in sequence and write the result back in place.

pub mod checkbox;
pub mod comprehensive;
pub mod indentation;
pub mod rules;

pub use checkbox::update_checkbox_format;
pub use comprehensive::fix_all_checkbox_issues;
pub use indentation::fix_checkbox_indentation;
pub use rules::RewriteRule;

use crate::models::PatchReport;
use crate::utils::fs::write_atomic;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Errors that can occur while patching a document
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to read file '{0}': {1}")]
    FileRead(PathBuf, std::io::Error),

    #[error("Invalid pattern for rule '{0}': {1}")]
    InvalidPattern(String, regex::Error),

    #[error("Failed to back up '{0}': {1}")]
    Backup(PathBuf, std::io::Error),

    #[error("Failed to write file '{0}': {1}")]
    FileWrite(PathBuf, std::io::Error),
}

/// The available patch jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchJob {
    FixIndentation,
    ComprehensiveFix,
    MigrateCheckboxes,
}

impl PatchJob {
    pub fn name(&self) -> &'static str {
        match self {
            PatchJob::FixIndentation => indentation::JOB_NAME,
            PatchJob::ComprehensiveFix => comprehensive::JOB_NAME,
            PatchJob::MigrateCheckboxes => checkbox::JOB_NAME,
        }
    }

    /// Closing line printed after the job rewrote the file
    pub fn done_message(&self) -> &'static str {
        match self {
            PatchJob::FixIndentation => "Successfully fixed all checkbox container indentation issues!",
            PatchJob::ComprehensiveFix => "Successfully applied comprehensive fixes to all checkbox issues!",
            PatchJob::MigrateCheckboxes => "Successfully updated all checkbox containers!",
        }
    }

    pub fn rules(&self) -> Result<Vec<RewriteRule>, PatchError> {
        match self {
            PatchJob::FixIndentation => indentation::rules(),
            PatchJob::ComprehensiveFix => comprehensive::rules(),
            PatchJob::MigrateCheckboxes => checkbox::rules(),
        }
    }

    /// Run the job over an in-memory document
    pub fn apply(&self, html: &str) -> Result<(String, PatchReport), PatchError> {
        Ok(run_rules(self.name(), &self.rules()?, html))
    }
}

/// How a job touches the file on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Compute the report without writing
    pub dry_run: bool,
    /// Copy the original to `<file>.bak` first
    pub backup: bool,
}

pub(crate) fn run_rules(job: &str, rules: &[RewriteRule], html: &str) -> (String, PatchReport) {
    let mut report = PatchReport::new(job);
    report.original_len = html.chars().count();

    let mut content = html.to_string();
    for rule in rules {
        let (rewritten, replacements) = rule.apply(&content);
        report.record(rule.name(), replacements);
        content = rewritten;
    }

    report.patched_len = content.chars().count();
    report.changed = content != html;
    (content, report)
}

/// Path of the backup copy for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Apply a job to a file in place.
///
/// The file is rewritten even when nothing matched. The write goes through a
/// temp file in the same directory, so a failure leaves the original intact.
pub fn patch_file(path: &Path, job: PatchJob, options: PatchOptions) -> Result<PatchReport, PatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| PatchError::FileRead(path.to_path_buf(), e))?;
    let (patched, mut report) = job.apply(&content)?;

    if options.dry_run {
        return Ok(report);
    }

    if options.backup {
        let backup = backup_path(path);
        std::fs::copy(path, &backup).map_err(|e| PatchError::Backup(backup.clone(), e))?;
    }

    write_atomic(path, &patched).map_err(|e| PatchError::FileWrite(path.to_path_buf(), e))?;
    report.written = true;
    Ok(report)
}
