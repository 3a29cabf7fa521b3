use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;
use url::Url;

pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY&count=24";
pub const DEFAULT_MIN_LOADING_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TRIGGER_LABEL: &str = "Fetch images";
pub const DEFAULT_LOADING_LABEL: &str = "Loading...";

pub const ENV_FEED_URL: &str = "APOD_GALLERY_FEED_URL";
pub const ENV_MIN_LOADING_MS: &str = "APOD_GALLERY_MIN_LOADING_MS";

/// On-disk shape of `config.toml`; every key is optional.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub(crate) feed_url: Option<String>,
    #[serde(default)]
    pub(crate) min_loading_ms: Option<u64>,
    #[serde(default)]
    pub(crate) request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) trigger_label: Option<String>,
    #[serde(default)]
    pub(crate) loading_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub feed_url: Url,
    /// Minimum time the loading state stays visible.
    pub min_loading: Duration,
    pub request_timeout: Duration,
    pub trigger_label: String,
    pub loading_label: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            feed_url: Url::parse(DEFAULT_FEED_URL).expect("default feed url is valid"),
            min_loading: Duration::from_millis(DEFAULT_MIN_LOADING_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            loading_label: DEFAULT_LOADING_LABEL.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Platform config location, e.g. `~/.config/apod-gallery/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "apod", "apod-gallery").map(|d| d.config_dir().join("config.toml"))
    }

    /// Defaults, then the config file, then environment overrides.
    ///
    /// An explicit `path` must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => read_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => read_file(&p)?,
                _ => ConfigFile::default(),
            },
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    pub(crate) fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(url) = env(ENV_FEED_URL).or(file.feed_url) {
            cfg.feed_url = parse_feed_url(&url)?;
        }
        if let Some(ms) = env(ENV_MIN_LOADING_MS) {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("{ENV_MIN_LOADING_MS} must be a number of milliseconds, got `{ms}`"))?;
            cfg.min_loading = Duration::from_millis(ms);
        } else if let Some(ms) = file.min_loading_ms {
            cfg.min_loading = Duration::from_millis(ms);
        }
        if let Some(secs) = file.request_timeout_secs {
            cfg.request_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(label) = file.trigger_label.filter(|s| !s.trim().is_empty()) {
            cfg.trigger_label = label;
        }
        if let Some(label) = file.loading_label.filter(|s| !s.trim().is_empty()) {
            cfg.loading_label = label;
        }
        Ok(cfg)
    }
}

pub fn parse_feed_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid feed url `{raw}`"))?;
    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "feed url must be http or https (got `{}`)",
        url.scheme()
    );
    Ok(url)
}

fn read_file(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let file = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> { None }

    #[test]
    fn defaults_without_file_or_env() {
        let cfg = GalleryConfig::resolve(ConfigFile::default(), no_env).unwrap();
        assert_eq!(cfg, GalleryConfig::default());
        assert_eq!(cfg.min_loading, Duration::from_millis(500));
    }

    #[test]
    fn file_values_apply() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "feed_url = \"http://localhost:8080/apod.json\"\nmin_loading_ms = 0\ntrigger_label = \"Refresh\"\n",
        )
        .unwrap();
        let cfg = GalleryConfig::resolve(read_file(&path).unwrap(), no_env).unwrap();
        assert_eq!(cfg.feed_url.as_str(), "http://localhost:8080/apod.json");
        assert_eq!(cfg.min_loading, Duration::ZERO);
        assert_eq!(cfg.trigger_label, "Refresh");
        assert_eq!(cfg.loading_label, DEFAULT_LOADING_LABEL);
    }

    #[test]
    fn env_overrides_file() {
        let file = ConfigFile {
            feed_url: Some("http://file.example/feed.json".into()),
            min_loading_ms: Some(900),
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_FEED_URL => Some("https://env.example/feed.json".to_string()),
            ENV_MIN_LOADING_MS => Some("10".to_string()),
            _ => None,
        };
        let cfg = GalleryConfig::resolve(file, env).unwrap();
        assert_eq!(cfg.feed_url.host_str(), Some("env.example"));
        assert_eq!(cfg.min_loading, Duration::from_millis(10));
    }

    #[test]
    fn rejects_bad_values() {
        let file = ConfigFile { feed_url: Some("ftp://x/feed.json".into()), ..Default::default() };
        assert!(GalleryConfig::resolve(file, no_env).is_err());
        let env = |key: &str| (key == ENV_MIN_LOADING_MS).then(|| "soon".to_string());
        assert!(GalleryConfig::resolve(ConfigFile::default(), env).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = GalleryConfig::load(Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "feed = \"x\"\n").unwrap();
        assert!(read_file(&path).is_err());
    }
}
