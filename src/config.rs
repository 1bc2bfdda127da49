use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub store: StoreConfig,
    pub recognition: RecognitionConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the transcript store, without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionConfig {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Config {
    /// Load configuration, layering an optional TOML file over defaults
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "voicenotes")?
            .set_default("store.base_url", "http://localhost:5050")?
            .set_default("recognition.language", "en-US")?
            .set_default("recognition.continuous", true)?
            .set_default("recognition.interim_results", true)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let cfg = Config::load("does/not/exist").unwrap();
        assert_eq!(cfg.service.name, "voicenotes");
        assert_eq!(cfg.store.base_url, "http://localhost:5050");
        assert_eq!(cfg.recognition.language, "en-US");
        assert!(cfg.recognition.continuous);
        assert!(cfg.recognition.interim_results);
    }
}
