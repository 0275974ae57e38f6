use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub user_agent: String,
    pub accept_language: String,
    pub fetch_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub cache_sweep_interval_secs: u64,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            user_agent: "Mozilla/5.0 (compatible; Bot/1.0; +https://example.com/bot)".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            fetch_timeout_secs: 15,
            cache_ttl_secs: 60 * 60,
            cache_sweep_interval_secs: 5 * 60,
            rate_limit_window_secs: 60,
            rate_limit_max: 20,
        }
    }
}

impl Config {
    /// Defaults, overlaid with the TOML file at `path` (if any), then `PORT`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config: Config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", port, e))?;
        }

        if config.cache_sweep_interval_secs == 0 {
            anyhow::bail!("cache_sweep_interval_secs must be greater than zero");
        }
        if config.rate_limit_window_secs == 0 {
            anyhow::bail!("rate_limit_window_secs must be greater than zero");
        }

        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn cache_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval_secs)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.rate_limit_max, 20);
        assert_eq!(config.rate_limit_window(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("fetch_timeout_secs = 10\nrate_limit_max = 5\n").unwrap();
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.rate_limit_max, 5);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.accept_language, "en-US,en;q=0.9");
    }
}
