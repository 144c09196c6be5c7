// Frameworks: runtime bootstrap, configuration and filesystem access.

pub mod card_file;
pub mod config;
pub mod server;
