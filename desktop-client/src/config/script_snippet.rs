use common::config::Validate;
use serde::{Deserialize, Serialize};

/// A script shown on the page with a copy button next to it.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScriptSnippet {
    pub name: String,
    pub content: String,
}

impl Validate for ScriptSnippet {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("script name must not be empty".to_string());
        }
        Ok(())
    }
}

pub fn default_snippets() -> Vec<ScriptSnippet> {
    vec![
        ScriptSnippet {
            name: "Flush DNS cache".to_string(),
            content: "ipconfig /flushdns".to_string(),
        },
        ScriptSnippet {
            name: "Show listening ports".to_string(),
            content: "ss -tulpn".to_string(),
        },
    ]
}
