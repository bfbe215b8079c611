use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use formpatch::cli::{ExtractDocArgs, ExtractDocxArgs, PatchArgs};
use formpatch::{PatchJob, Result};
use std::io;

#[derive(Parser)]
#[command(name = "formpatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluation form patcher and legacy document extractor", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-indent item-text blocks that follow a two-group checkbox container
    #[command(name = "fix-indentation")]
    FixIndentation(PatchArgs),

    /// Apply all four checkbox container fixes in order
    #[command(name = "comprehensive-fix")]
    ComprehensiveFix(PatchArgs),

    /// Replace old two-checkbox containers with pass/fail markup
    #[command(name = "migrate-checkboxes")]
    MigrateCheckboxes(PatchArgs),

    /// Recover readable text from a legacy binary .doc file
    #[command(name = "extract-doc")]
    ExtractDoc(ExtractDocArgs),

    /// Extract paragraphs and table rows from a .docx file
    #[command(name = "extract-docx")]
    ExtractDocx(ExtractDocxArgs),

    /// Write a formpatch.toml with default settings
    #[command(name = "init-config")]
    InitConfig {
        /// Overwrite an existing formpatch.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::FixIndentation(args) => {
            formpatch::cli::patch::run(PatchJob::FixIndentation, args)?;
        }

        Commands::ComprehensiveFix(args) => {
            formpatch::cli::patch::run(PatchJob::ComprehensiveFix, args)?;
        }

        Commands::MigrateCheckboxes(args) => {
            formpatch::cli::patch::run(PatchJob::MigrateCheckboxes, args)?;
        }

        Commands::ExtractDoc(args) => {
            formpatch::cli::extract_doc::run(args)?;
        }

        Commands::ExtractDocx(args) => {
            formpatch::cli::extract_docx::run(args)?;
        }

        Commands::InitConfig { force } => {
            formpatch::cli::init_config::run(force)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "formpatch", &mut io::stdout());
        }
    }

    Ok(())
}
