use crate::extract::extract_docx_content;
use crate::models::FormpatchConfig;
use crate::utils::write_atomic;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct ExtractDocxArgs {
    /// Document to read (default: [extract].document from formpatch.toml)
    pub path: Option<PathBuf>,

    /// Directory for the result file (default: current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: ExtractDocxArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    run_in(&project_root, &args).map(|_| ())
}

/// Returns the printed content, or `None` when the document does not exist.
pub fn run_in(project_root: &Path, args: &ExtractDocxArgs) -> Result<Option<String>> {
    let config = FormpatchConfig::load(project_root)?;
    let document = args.path.as_ref().unwrap_or(&config.extract.document);
    let source = project_root.join(document);

    if !source.exists() {
        println!(
            "{}",
            format!("Error: File '{}' not found in current directory", document.display()).red()
        );
        return Ok(None);
    }

    println!("{}", format!("Extracting content from: {}", document.display()).cyan());
    println!("{}", "=".repeat(50));

    // A legacy OLE .doc is not a zip container; that lands here as text
    let content = extract_docx_content(&source).unwrap_or_else(|e| format!("Error reading document: {}", e));
    println!("{}", content);

    let out_dir = project_root.join(args.out_dir.as_deref().unwrap_or(Path::new("")));
    let output_path = out_dir.join(&config.extract.docx_output);
    let saved = format!(
        "Content extracted from: {}\n{}\n\n{}",
        document.display(),
        "=".repeat(50),
        content
    );

    match write_atomic(&output_path, &saved) {
        Ok(()) => println!(
            "\n\n{}",
            format!("✓ Content also saved to: {}", config.extract.docx_output.display()).green()
        ),
        Err(e) => eprintln!("{}", format!("Error saving to file: {}", e).red()),
    }

    Ok(Some(content))
}
