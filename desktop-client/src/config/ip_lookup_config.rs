use common::config::Validate;
use common::tools::ip_lookup::DEFAULT_IP_ECHO_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct IpLookupConfig {
    pub enabled: bool,
    pub url: String,
}

impl Validate for IpLookupConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(format!("ip_lookup url must be an http(s) url, got '{}'", self.url));
        }
        Ok(())
    }
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_IP_ECHO_URL.to_string(),
        }
    }
}
