// idcheck-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["idcheck.yaml", "idcheck_project.yaml"];

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Locate the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Base YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)?;

    // 3. Environment overrides (layering)
    // IDCHECK_DATASET_PATH=/mnt/scans idcheck run
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    // 4. Fail fast on an invalid configuration
    config
        .check()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No configuration file found in {:?}. Checked: {:?}",
                root, CONFIG_CANDIDATES
            ))
        })
}

fn apply_env_overrides(config: &mut ProjectConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("IDCHECK_DATASET_PATH") {
        info!(old = ?config.dataset_path, new = ?val, "Overriding dataset path via ENV");
        config.dataset_path = val;
    }
    if let Some(val) = lookup("IDCHECK_OUTPUT_PATH") {
        info!(old = ?config.output_path, new = ?val, "Overriding output path via ENV");
        config.output_path = val;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_load_minimal_config() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("idcheck.yaml"), "name: kyc\nconcurrency: 2\n")?;

        let config = load_project_config(dir.path())?;
        assert_eq!(config.name, "kyc");
        assert_eq!(config.concurrency, 2);
        Ok(())
    }

    #[test]
    fn test_missing_config() -> Result<()> {
        let dir = tempdir()?;
        let result = load_project_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("idcheck_project.yaml"), "name: kyc\nconcurrency: 0\n")?;
        let result = load_project_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_malformed_yaml() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("idcheck.yaml"), "name: [unclosed\n")?;
        let result = load_project_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::YamlError(_))));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ProjectConfig::new("kyc");
        apply_env_overrides(&mut config, |key| match key {
            "IDCHECK_DATASET_PATH" => Some("/mnt/scans".to_string()),
            _ => None,
        });
        assert_eq!(config.dataset_path, "/mnt/scans");
        assert_eq!(config.output_path, "output_all_persons.json");
    }
}
