use figment::{Figment, providers::{Format, Toml, Env}};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Indexer management API endpoint
    #[serde(default = "default_api")]
    pub api: String,
}

fn default_api() -> String {
    "http://127.0.0.1:18000".to_string()
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("indexer.toml"))
            .merge(Env::prefixed("INDEXER_"))
            .extract()
    }
}
