use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tools::banner::AccessGate;
use common::tools::consent::ConsentState;
use serde::{Deserialize, Serialize};

use super::script_snippet::default_snippets;
use super::{IpLookupConfig, ScriptSnippet, SnakeConfig};

const CONFIG_FILE_NAME: &str = "homepage_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "homepage_high_score.yaml";

pub type HomepageConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

/// Resolves `file_name` next to the executable, falling back to the working directory.
pub fn path_near_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn resolve_config_path(config_path: Option<&str>) -> String {
    match config_path {
        Some(path) => path.to_string(),
        None => path_near_executable(CONFIG_FILE_NAME),
    }
}

pub fn get_config_manager(config_path: &str) -> HomepageConfigManager {
    ConfigManager::from_yaml_file(config_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    pub ip_lookup: IpLookupConfig,
    pub access: AccessGate,
    pub scripts: Vec<ScriptSnippet>,
    #[serde(default)]
    pub consent: ConsentState,
    pub player_name: Option<String>,
    pub high_score_file: String,
}

impl Config {
    /// Relative high-score paths live next to the executable.
    pub fn high_score_path(&self) -> String {
        if std::path::Path::new(&self.high_score_file).is_absolute() {
            self.high_score_file.clone()
        } else {
            path_near_executable(&self.high_score_file)
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.ip_lookup.validate()?;
        for script in &self.scripts {
            script.validate()?;
        }
        if !self.access.code.is_empty() && self.access.destination.trim().is_empty() {
            return Err("access destination must be set when an access code is configured".to_string());
        }
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            ip_lookup: IpLookupConfig::default(),
            access: AccessGate {
                code: String::new(),
                destination: String::new(),
            },
            scripts: default_snippets(),
            consent: ConsentState::Undecided,
            player_name: None,
            high_score_file: HIGH_SCORE_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::player_name::generate_player_name;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_homepage_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_manager() {
        let config = Config {
            player_name: Some(generate_player_name()),
            consent: ConsentState::Accepted,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        assert!(manager.set_config(&config).is_ok());

        let loaded_config = manager.get_config().unwrap();
        assert_eq!(config, loaded_config);

        let reopened = get_config_manager(&file_path);
        assert_eq!(config, reopened.get_config().unwrap());
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        let loaded_config = manager.get_config().unwrap();
        assert_eq!(Config::default(), loaded_config);
    }

    #[test]
    fn test_consent_update_is_persisted() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager
            .update_config(|config| config.consent = ConsentState::Declined)
            .unwrap();

        let reopened = get_config_manager(&file_path);
        assert_eq!(reopened.get_config().unwrap().consent, ConsentState::Declined);
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            snake:
              canvas_width: 600
              canvas_height: 500
              initial_tick_interval_ms: 200
              min_tick_interval_ms: 50
              speedup_factor: 3.0
              autopilot: null
            ip_lookup:
              enabled: true
              url: https://api.ipify.org?format=json
            access:
              code: ""
              destination: ""
            scripts: []
            player_name: null
            high_score_file: high_score.yaml
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        assert_eq!(resolve_config_path(Some("custom.yaml")), "custom.yaml");
        assert!(resolve_config_path(None).ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_access_code_requires_destination() {
        let config = Config {
            access: AccessGate {
                code: "252".to_string(),
                destination: String::new(),
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
