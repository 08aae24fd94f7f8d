pub mod config;
pub mod games;
pub mod high_score;
pub mod logger;
pub mod player_name;
pub mod tools;
pub mod version;
