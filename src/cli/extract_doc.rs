//! Legacy .doc extraction command
//!
//! Runs both heuristics, echoes them, and saves each to its own text file.
//! Read failures are reported inside the output text, not as command errors.

use crate::extract::doc::{extract_printable_from_file, extract_sentences_from_file};
use crate::extract::{preview, NO_SENTENCES_FOUND};
use crate::models::FormpatchConfig;
use crate::utils::write_atomic;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct ExtractDocArgs {
    /// Document to read (default: [extract].document from formpatch.toml)
    pub path: Option<PathBuf>,

    /// Directory for the result files (default: current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Text produced by both methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocExtraction {
    pub method1: String,
    pub method2: String,
}

pub fn run(args: ExtractDocArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    run_in(&project_root, &args).map(|_| ())
}

/// Returns `None` when the document does not exist.
pub fn run_in(project_root: &Path, args: &ExtractDocArgs) -> Result<Option<DocExtraction>> {
    let config = FormpatchConfig::load(project_root)?;
    let options = config.extract.options();
    let document = args.path.as_ref().unwrap_or(&config.extract.document);
    let source = project_root.join(document);

    if !source.exists() {
        println!("{}", format!("Error: File '{}' not found", document.display()).red());
        return Ok(None);
    }

    println!("{}", format!("Attempting to extract text from: {}", document.display()).cyan());
    println!("{}", "=".repeat(60));

    println!("{}", "Method 1: Simple binary extraction".bold());
    println!("{}", "-".repeat(40));
    let method1 = extract_printable_from_file(&source, &options)
        .unwrap_or_else(|e| format!("Error reading file: {}", e));
    println!("{}", preview(&method1, config.extract.preview_chars));

    println!("\n{}", "=".repeat(60));

    // Encoding attempts that fail are skipped, as is an unreadable file
    println!("{}", "Method 2: Alternative encoding extraction".bold());
    println!("{}", "-".repeat(40));
    let method2 = extract_sentences_from_file(&source, &options)
        .unwrap_or_else(|_| NO_SENTENCES_FOUND.to_string());
    println!("{}", method2);

    let out_dir = project_root.join(args.out_dir.as_deref().unwrap_or(Path::new("")));
    let outputs = [
        (&config.extract.method1_output, &method1, "Method 1"),
        (&config.extract.method2_output, &method2, "Method 2"),
    ];

    println!();
    for (output, text, label) in outputs {
        let output_path = out_dir.join(output);
        if let Err(e) = write_atomic(&output_path, text) {
            eprintln!("{}", format!("Error saving results: {}", e).red());
            break;
        }
        println!(
            "{} {} results saved to: {}",
            "✓".green(),
            label,
            output.display()
        );
    }

    Ok(Some(DocExtraction { method1, method2 }))
}
