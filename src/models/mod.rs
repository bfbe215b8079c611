pub mod config;
pub mod report;

pub use config::{ExtractConfig, FormpatchConfig, PatchConfig, CONFIG_FILE};
pub use report::{PatchReport, RuleOutcome};
