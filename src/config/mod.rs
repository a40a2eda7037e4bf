mod loader;
mod types;

pub use loader::{default_config_path, ConfigError};
pub use types::{is_valid_date_format, Config, DisplayConfig, UiConfig};
