use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_ROLES, DEFAULT_SKILLS};
use crate::error::{RosterError, RosterResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Override for the roster data file; env and CLI take precedence.
    pub data_file: Option<PathBuf>,
    /// Role vocabulary offered by the member form.
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    /// Skill vocabulary offered by the member form.
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    /// Card layout used when --view is not given.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_roles() -> Vec<String> {
    DEFAULT_ROLES.iter().map(|s| s.to_string()).collect()
}

fn default_skills() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

fn default_view() -> String {
    "list".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            roles: default_roles(),
            skills: default_skills(),
            default_view: default_view(),
        }
    }
}

fn config_path() -> RosterResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or_else(|| RosterError::ConfigError("Could not find home directory".to_string()))
}

pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };

    if path.exists() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> RosterResult<()> {
    let path = config_path()?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabularies_are_populated() {
        let config = Config::default();
        assert!(config.roles.contains(&"developer".to_string()));
        assert!(config.skills.contains(&"rust".to_string()));
        assert_eq!(config.default_view, "list");
    }

    #[test]
    fn test_missing_fields_fall_back_on_deserialize() {
        let config: Config = serde_json::from_str(r#"{"data_file": null}"#).unwrap();
        assert!(!config.roles.is_empty());
        assert!(!config.skills.is_empty());
    }
}
