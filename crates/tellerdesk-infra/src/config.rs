//! Chat configuration loader.
//!
//! Reads `tellerdesk.toml` from the given directory and deserializes it
//! into [`ChatConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use tellerdesk_types::config::ChatConfig;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "tellerdesk.toml";

/// Load chat configuration from `{dir}/tellerdesk.toml`.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_chat_config(dir: &Path) -> ChatConfig {
    let config_path = dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE} found at {}, using defaults", config_path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ChatConfig::default();
        }
    };

    match toml::from_str::<ChatConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ChatConfig::default()
        }
    }
}
