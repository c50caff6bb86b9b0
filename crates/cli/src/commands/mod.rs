pub mod ask;
pub mod context;
pub mod doctor;
pub mod seed;
pub mod serve;

use alumnet_config::AppConfig;
use std::path::Path;

/// Load configuration the way every command does.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    AppConfig::load(path).map_err(|e| format!("Failed to load config: {e}").into())
}
