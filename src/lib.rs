// formpatch - Evaluation form patcher and legacy document extractor
// Regex rewrites for one hand-authored HTML form, plus best-effort text recovery from .doc/.docx

pub mod cli;
pub mod extract;
pub mod models;
pub mod patch;
pub mod utils;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use extract::{ExtractError, ExtractOptions};
pub use models::{FormpatchConfig, PatchReport, RuleOutcome};
pub use patch::{PatchError, PatchJob, PatchOptions};
