//! Project configuration
//!
//! Loaded from `formpatch.toml` in the project root. Every field has a default,
//! so the file is optional and may list only the keys it overrides.

use crate::extract::ExtractOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, resolved against the project root
pub const CONFIG_FILE: &str = "formpatch.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormpatchConfig {
    /// HTML patching settings
    #[serde(default)]
    pub patch: PatchConfig,

    /// Document extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Settings shared by the HTML patch commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// HTML file rewritten in place when no path is given
    pub target: PathBuf,

    /// Copy the original to `<target>.bak` before writing
    pub backup: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from("src/client/peer_evaluation_app.html"),
            backup: false,
        }
    }
}

/// Settings for the `.doc` and `.docx` extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Document read when no path is given
    pub document: PathBuf,

    /// Output of the printable-byte method
    pub method1_output: PathBuf,

    /// Output of the multi-encoding sentence method
    pub method2_output: PathBuf,

    /// Output of the `.docx` extractor
    pub docx_output: PathBuf,

    /// Lines must be strictly longer than this to survive
    pub min_line_len: usize,

    /// Characters of method 1 output echoed to the console
    pub preview_chars: usize,

    /// Sentences kept by method 2
    pub max_sentences: usize,

    /// Collapse only horizontal whitespace, keeping line structure
    pub preserve_line_breaks: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("Week 1 Personal Care Scenario -   Fall 2025.doc"),
            method1_output: PathBuf::from("extraction_method1.txt"),
            method2_output: PathBuf::from("extraction_method2.txt"),
            docx_output: PathBuf::from("extracted_content.txt"),
            min_line_len: 10,
            preview_chars: 1000,
            max_sentences: 20,
            preserve_line_breaks: false,
        }
    }
}

impl ExtractConfig {
    /// Heuristic knobs handed to the extraction functions
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            min_line_len: self.min_line_len,
            max_sentences: self.max_sentences,
            preserve_line_breaks: self.preserve_line_breaks,
        }
    }
}

impl FormpatchConfig {
    /// Load config from formpatch.toml
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: FormpatchConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to formpatch.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = project_root.join(CONFIG_FILE);
        std::fs::create_dir_all(project_root)?;

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = FormpatchConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FormpatchConfig::default());
        assert_eq!(config.extract.min_line_len, 10);
        assert_eq!(config.extract.max_sentences, 20);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[patch]\ntarget = \"form.html\"\n\n[extract]\nmin_line_len = 4\n",
        )
        .unwrap();

        let config = FormpatchConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.patch.target, PathBuf::from("form.html"));
        assert!(!config.patch.backup);
        assert_eq!(config.extract.min_line_len, 4);
        assert_eq!(config.extract.preview_chars, 1000);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = FormpatchConfig::default();
        config.patch.backup = true;
        config.extract.preserve_line_breaks = true;
        config.save(temp_dir.path()).unwrap();

        let loaded = FormpatchConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "[patch\n").unwrap();
        assert!(FormpatchConfig::load(temp_dir.path()).is_err());
    }
}
