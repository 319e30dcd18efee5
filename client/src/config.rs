use serde::{Deserialize, Serialize};
use tictactoe_engine::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Client preferences, stored as YAML next to the executable. Only settings
/// live here; scores and game history are never written to disk.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }

    pub fn load() -> Result<Config, String> {
        Self::load_from(&get_config_path())
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&get_config_path())
    }

    fn load_from(path: &str) -> Result<Config, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(Config::default()),
        };

        let config: Config = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    fn save_to(&self, path: &str) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            bot_delay_ms: 700,
        }
    }
}
