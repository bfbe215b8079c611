use crate::models::{FormpatchConfig, CONFIG_FILE};
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    run_in(&project_root, force)
}

pub fn run_in(project_root: &Path, force: bool) -> Result<()> {
    let config_path = project_root.join(CONFIG_FILE);
    if config_path.exists() && !force {
        println!("{}", format!("⚠ {} already exists", CONFIG_FILE).yellow());
        println!("   Run with --force to overwrite");
        return Ok(());
    }

    FormpatchConfig::default().save(project_root)?;
    println!("{}", format!("✓ Wrote {}", config_path.display()).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        run_in(temp_dir.path(), false).unwrap();
        let loaded = FormpatchConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, FormpatchConfig::default());
    }

    #[test]
    fn test_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[patch]\nbackup = true\n").unwrap();

        run_in(temp_dir.path(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[patch]\nbackup = true\n");

        run_in(temp_dir.path(), true).unwrap();
        assert!(!FormpatchConfig::load(temp_dir.path()).unwrap().patch.backup);
    }
}
