use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Config, read from the TOML file named on the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the blog backend, e.g. `http://localhost:3500`. The posts collection lives at
    /// `<backend_url>/posts`.
    pub backend_url: Url,

    /// By default, output JSON logs. Only if this flag is set to true, output colourful human-friendly logs
    #[serde(default)]
    pub human_logs: bool,

    /// Max HTTP body size accepted from the backend
    #[serde(default = "max_body_size")]
    pub max_body_size: usize,

    /// Seconds to wait for a backend response. Unset means wait indefinitely.
    pub request_timeout_secs: Option<u64>,

    /// Print the Prometheus text exposition of this run's metrics after the command finishes.
    #[serde(default)]
    pub print_metrics: bool,
}

impl Config {
    pub fn from_file(filepath: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(filepath)
            .with_context(|| format!("couldn't read config file {}", filepath))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents).context("couldn't parse config file")?;
        if config.backend_url.cannot_be_a_base() {
            anyhow::bail!("backend_url {} can't be used as a base URL", config.backend_url);
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn max_body_size() -> usize {
    65536
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml(r#"backend_url = "http://localhost:3500""#).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:3500/");
        assert!(!config.human_logs);
        assert!(!config.print_metrics);
        assert_eq!(config.max_body_size, 65536);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_all_fields() {
        let config = Config::from_toml(
            r#"
            backend_url = "https://blog.example.com/api"
            human_logs = true
            max_body_size = 1024
            request_timeout_secs = 10
            print_metrics = true
            "#,
        )
        .unwrap();
        assert_eq!(config.max_body_size, 1024);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert!(config.human_logs);
        assert!(config.print_metrics);
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(Config::from_toml(r#"backend_url = "not a url""#).is_err());
        assert!(Config::from_toml(r#"backend_url = "mailto:me@example.com""#).is_err());
        assert!(Config::from_toml("human_logs = true").is_err());
    }
}
