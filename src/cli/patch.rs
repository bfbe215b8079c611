//! HTML patch commands (fix-indentation, comprehensive-fix, migrate-checkboxes)

use crate::models::{FormpatchConfig, PatchReport};
use crate::patch::{self, PatchJob, PatchOptions};
use crate::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct PatchArgs {
    /// HTML file to rewrite in place (default: [patch].target from formpatch.toml)
    pub path: Option<PathBuf>,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Keep a copy of the original as <file>.bak
    #[arg(long)]
    pub backup: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(job: PatchJob, args: PatchArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    run_in(&project_root, job, &args).map(|_| ())
}

/// Run a patch job relative to `project_root`.
/// Kept separate from `run` so tests never touch the process CWD.
pub fn run_in(project_root: &Path, job: PatchJob, args: &PatchArgs) -> Result<PatchReport> {
    let config = FormpatchConfig::load(project_root)?;
    let target = project_root.join(args.path.as_ref().unwrap_or(&config.patch.target));

    let options = PatchOptions {
        dry_run: args.dry_run,
        backup: args.backup || config.patch.backup,
    };

    let report = patch::patch_file(&target, job, options)
        .with_context(|| format!("{} failed on {}", job.name(), target.display()))?;

    if args.json {
        println!("{}", report_json(&report)?);
    } else {
        print_report(&target, job, &report);
    }

    Ok(report)
}

fn report_json(report: &PatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn print_report(target: &Path, job: PatchJob, report: &PatchReport) {
    println!("{}", format!("🔧 {}: {}", report.job, target.display()).cyan());
    println!("   Original content length: {}", report.original_len);
    println!("   Fixed content length: {}", report.patched_len);

    for rule in &report.rules {
        let marker = if rule.replacements > 0 {
            "✓".green()
        } else {
            "→".bright_black()
        };
        println!("   {} {}: {} replacement(s)", marker, rule.name, rule.replacements);
    }

    if !report.written {
        println!("\n{}", "⚠ Dry run: file not written".yellow());
        return;
    }

    if !report.changed {
        println!("\n{}", "→ No matches; file rewritten unchanged".bright_black());
        return;
    }

    println!("\n{}", format!("✓ {}", job.done_message()).green());
}
