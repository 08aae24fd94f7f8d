use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::log;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u32,
    pub player: String,
}

impl HighScoreRecord {
    pub fn new(score: u32, player: impl Into<String>) -> Self {
        Self {
            score,
            player: player.into(),
        }
    }

    pub fn beats(&self, other: Option<&HighScoreRecord>) -> bool {
        self.score > other.map_or(0, |o| o.score)
    }
}

/// Best score across all runs, shared by every player.
pub trait HighScoreStore: Send + Sync {
    fn load(&self) -> Result<Option<HighScoreRecord>, String>;

    /// Saves `record` when it beats the stored one. Returns whether it did.
    fn submit(&self, record: &HighScoreRecord) -> Result<bool, String>;
}

#[derive(Default)]
pub struct InMemoryHighScoreStore {
    record: Mutex<Option<HighScoreRecord>>,
}

impl InMemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn load(&self) -> Result<Option<HighScoreRecord>, String> {
        Ok(self.record.lock().unwrap().clone())
    }

    fn submit(&self, record: &HighScoreRecord) -> Result<bool, String> {
        let mut current = self.record.lock().unwrap();
        if !record.beats(current.as_ref()) {
            return Ok(false);
        }
        *current = Some(record.clone());
        Ok(true)
    }
}

/// Keeps the record in whatever content provider backs it, serialized with
/// the same serializers as the app config.
pub struct PersistentHighScoreStore<TContentProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<HighScoreRecord>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
    lock: Mutex<()>,
}

pub type FileHighScoreStore = PersistentHighScoreStore<FileContentConfigProvider, YamlConfigSerializer>;

impl FileHighScoreStore {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TContentProvider, TSerializer> PersistentHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<HighScoreRecord>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<Option<HighScoreRecord>, String> {
        match self.content_provider.get_config_content()? {
            Some(content) if !content.trim().is_empty() => {
                self.serializer.deserialize(&content).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl<TContentProvider, TSerializer> HighScoreStore
    for PersistentHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider + Send + Sync,
    TSerializer: ConfigSerializer<HighScoreRecord> + Send + Sync,
{
    fn load(&self) -> Result<Option<HighScoreRecord>, String> {
        let _guard = self.lock.lock().unwrap();
        self.read()
    }

    fn submit(&self, record: &HighScoreRecord) -> Result<bool, String> {
        let _guard = self.lock.lock().unwrap();
        let current = self.read()?;
        if !record.beats(current.as_ref()) {
            return Ok(false);
        }

        let content = self.serializer.serialize(record)?;
        self.content_provider.set_config_content(&content)?;
        log!("New high score {} by {}", record.score, record.player);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JsonConfigSerializer, MemoryContentConfigProvider};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_homepage_high_score_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_zero_score_is_never_a_high_score() {
        let store = InMemoryHighScoreStore::new();

        assert!(!store.submit(&HighScoreRecord::new(0, "nobody")).unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_only_higher_scores_replace_record() {
        let store = InMemoryHighScoreStore::new();

        assert!(store.submit(&HighScoreRecord::new(5, "first")).unwrap());
        assert!(!store.submit(&HighScoreRecord::new(5, "tie")).unwrap());
        assert!(!store.submit(&HighScoreRecord::new(3, "lower")).unwrap());
        assert!(store.submit(&HighScoreRecord::new(8, "second")).unwrap());

        assert_eq!(store.load().unwrap(), Some(HighScoreRecord::new(8, "second")));
    }

    #[test]
    fn test_json_store_round_trip_in_memory() {
        let provider = MemoryContentConfigProvider::new();
        let store = PersistentHighScoreStore::new(provider.clone(), JsonConfigSerializer::new());

        store.submit(&HighScoreRecord::new(12, "Swift Cobra")).unwrap();

        let content = provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("\"score\": 12"));
        assert!(content.contains("\"player\": \"Swift Cobra\""));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileHighScoreStore::from_yaml_file(&get_temp_file_path());

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_between_instances() {
        let file_path = get_temp_file_path();
        let store = FileHighScoreStore::from_yaml_file(&file_path);

        assert!(store.submit(&HighScoreRecord::new(21, "Bold Viper")).unwrap());

        let reopened = FileHighScoreStore::from_yaml_file(&file_path);
        assert_eq!(reopened.load().unwrap(), Some(HighScoreRecord::new(21, "Bold Viper")));
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let provider = MemoryContentConfigProvider::new();
        provider.set_config_content("score: [not a number").unwrap();
        let store = PersistentHighScoreStore::new(provider, YamlConfigSerializer::new());

        assert!(store.load().is_err());
    }
}
