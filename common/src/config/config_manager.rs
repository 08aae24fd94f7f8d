use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }

    /// Loads the current config, applies `change` and saves the result.
    pub fn update_config<F>(&self, change: F) -> Result<TConfig, String>
    where
        F: FnOnce(&mut TConfig),
    {
        let mut config = self.get_config()?;
        change(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        limit: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                limit: 5,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.limit == 0 {
                return Err("limit must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    fn create_manager(
        provider: MemoryContentConfigProvider,
    ) -> ConfigManager<MemoryContentConfigProvider, TestConfig> {
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = create_manager(MemoryContentConfigProvider::new());

        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_config_is_visible_to_fresh_manager() {
        let provider = MemoryContentConfigProvider::new();
        let manager = create_manager(provider.clone());
        let config = TestConfig {
            name: "saved".to_string(),
            limit: 9,
        };

        manager.set_config(&config).unwrap();

        let reloaded = create_manager(provider).get_config().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_save() {
        let manager = create_manager(MemoryContentConfigProvider::new());
        let config = TestConfig {
            name: "bad".to_string(),
            limit: 0,
        };

        assert!(manager.set_config(&config).is_err());
    }

    #[test]
    fn test_invalid_content_is_rejected_on_load() {
        let provider = MemoryContentConfigProvider::new();
        provider
            .set_config_content("name: broken\nlimit: 0\n")
            .unwrap();

        let result = create_manager(provider).get_config();

        assert!(result.is_err());
    }

    #[test]
    fn test_update_config_persists_change() {
        let provider = MemoryContentConfigProvider::new();
        let manager = create_manager(provider.clone());

        let updated = manager.update_config(|c| c.limit = 42).unwrap();

        assert_eq!(updated.limit, 42);
        assert_eq!(create_manager(provider).get_config().unwrap().limit, 42);
    }
}
