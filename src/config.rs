use crate::error::{MullaiError, Result};
use mullai_common::Purpose;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_REPORT_FILE_NAME: &str = "report.pdf";
const GEOCODER_URL_ENV: &str = "MULLAI_GEOCODER_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoder_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub report_file_name: String,
    pub default_purpose: Purpose,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.into(),
            // Nominatimの利用規約でUser-Agentの明示が必要
            user_agent: format!("mullai/{}", env!("CARGO_PKG_VERSION")),
            timeout_seconds: 10,
            report_file_name: DEFAULT_REPORT_FILE_NAME.into(),
            default_purpose: Purpose::Commercial,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // 環境変数を優先
        if let Ok(url) = std::env::var(GEOCODER_URL_ENV) {
            if !url.trim().is_empty() {
                config.geocoder_url = url;
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MullaiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("mullai").join("config.json"))
    }

    pub fn set_geocoder_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MullaiError::Config(format!("geocoder URL must be http(s): {}", url)));
        }
        self.geocoder_url = url.trim_end_matches('/').to_string();
        self.save()
    }

    pub fn set_user_agent(&mut self, user_agent: String) -> Result<()> {
        self.user_agent = user_agent;
        self.save()
    }
}
