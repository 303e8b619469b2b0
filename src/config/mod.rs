use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
    #[serde(default = "default_status_refresh")]
    pub status_refresh_secs: u64,
    #[serde(default = "default_feed_refresh")]
    pub feed_refresh_secs: u64,
    #[serde(default = "default_hall")]
    pub default_hall: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: char,
}

fn default_feed_limit() -> usize {
    crate::core::feed::DEFAULT_FEED_LIMIT
}
fn default_status_refresh() -> u64 {
    60
}
fn default_feed_refresh() -> u64 {
    30
}
fn default_hall() -> String {
    "Main Gym".to_string()
}
fn default_separator_char() -> char {
    '-'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            feed_limit: default_feed_limit(),
            status_refresh_secs: default_status_refresh(),
            feed_refresh_secs: default_feed_refresh(),
            default_hall: default_hall(),
            separator_char: default_separator_char(),
        }
    }
}

/// `~/x` → `$HOME/x`; anything else is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rgymdesk")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rgymdesk")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rgymdesk.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rgymdesk.sqlite")
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // a custom path is taken as given, like `--db` on every other command
        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let path = std::env::temp_dir().join("rgymdesk_partial_config.conf");
        fs::write(&path, "database: /tmp/gym.sqlite\nfeed_limit: 5\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/gym.sqlite");
        assert_eq!(cfg.feed_limit, 5);
        assert_eq!(cfg.status_refresh_secs, 60);
        assert_eq!(cfg.feed_refresh_secs, 30);
        assert_eq!(cfg.default_hall, "Main Gym");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join("rgymdesk_saved_config.conf");
        let cfg = Config {
            database: "/tmp/other.sqlite".into(),
            default_hall: "Cardio Zone".into(),
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.default_hall, "Cardio Zone");
        assert_eq!(back.database, "/tmp/other.sqlite");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let path = std::env::temp_dir().join("rgymdesk_broken_config.conf");
        fs::write(&path, "feed_limit: [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
        fs::remove_file(&path).ok();
    }
}
