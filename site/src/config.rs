use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `VROOMIE_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match get("VROOMIE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("VROOMIE_PORT is not a port number: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: get("VROOMIE_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            dist_dir: get("VROOMIE_DIST_DIR").unwrap_or_else(|| "../dist".into()).into(),
            assets_dir: get("VROOMIE_ASSETS_DIR").unwrap_or_else(|| "../assets".into()).into(),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
