//! Loader for workspace configuration with YAML + environment overlays.
//!
//! The loader merges an optional `pagemood.yaml` with `PAGEMOOD__`-prefixed
//! environment variables and expands `${VAR}` placeholders, so the
//! credentials key file path can be written as `${KEYDIR_PATH}` and injected
//! from the environment.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Environment variable naming the credentials key file.
pub const KEYDIR_ENV: &str = "KEYDIR_PATH";

/// The page analysed when no URL is given on the command line.
pub const DEFAULT_TARGET_URL: &str = "https://mlh.io";

#[derive(Debug, Deserialize)]
pub struct PagemoodConfig {
    /// Page to analyse when no URL argument is given.
    #[serde(default)]
    pub url: Option<String>,
    pub analyzer: AnalyzerConfig,
}

impl PagemoodConfig {
    /// Target URL after applying the CLI override and the built-in default.
    pub fn target_url(&self, cli_url: Option<&str>) -> String {
        cli_url
            .map(str::to_string)
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| DEFAULT_TARGET_URL.to_string())
    }
}

/// Settings for the remote language service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Path to the credentials key file. Usually `${KEYDIR_PATH}`.
    pub key_path: String,
    /// Language hint sent with every document.
    #[serde(default = "default_language")]
    pub language: String,
    /// Override the service endpoint (tests point this at a mock server).
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl AnalyzerConfig {
    /// Build an analyzer config straight from `KEYDIR_PATH`, for runs
    /// without a config file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_path = std::env::var(KEYDIR_ENV).map_err(|_| {
            ConfigError::Message(format!("{KEYDIR_ENV} is not set and no config file was given"))
        })?;
        Ok(Self {
            key_path,
            language: default_language(),
            endpoint: None,
        })
    }
}

fn default_language() -> String {
    "en".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct PagemoodConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for PagemoodConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PagemoodConfigLoader {
    /// Start with sensible defaults: YAML file + `PAGEMOOD` env overrides.
    ///
    /// ```
    /// use pagemood_config::PagemoodConfigLoader;
    ///
    /// let config = PagemoodConfigLoader::new()
    ///     .with_yaml_str("analyzer:\n  key_path: /tmp/key.json")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.analyzer.key_path, "/tmp/key.json");
    /// assert_eq!(config.analyzer.language, "en");
    /// assert!(config.url.is_none());
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("PAGEMOOD").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    ///
    /// ```
    /// use pagemood_config::PagemoodConfigLoader;
    ///
    /// std::env::set_var("KEYDIR_PATH", "/secrets/language.json");
    ///
    /// let config = PagemoodConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// url: "https://example.com"
    /// analyzer:
    ///   key_path: "${KEYDIR_PATH}"
    ///   language: "en"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.url.as_deref(), Some("https://example.com"));
    /// assert_eq!(config.analyzer.key_path, "/secrets/language.json");
    ///
    /// std::env::remove_var("KEYDIR_PATH");
    /// ```
    pub fn load(self) -> Result<PagemoodConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Convert to serde_json::Value first
        let mut v: Value = cfg.try_deserialize()?;
        // Recursively expand environment variables
        expand_env_in_value(&mut v);

        // Deserialize into the strongly-typed config
        let typed: PagemoodConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
