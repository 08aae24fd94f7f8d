mod ip_lookup_config;
mod main_config;
mod script_snippet;
mod snake_config;

pub use ip_lookup_config::IpLookupConfig;
pub use main_config::{get_config_manager, resolve_config_path, Config, HomepageConfigManager};
pub use script_snippet::ScriptSnippet;
pub use snake_config::SnakeConfig;
