use serde::Deserialize;
use std::path::PathBuf;

fn default_fetch_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub report_source: Option<String>,
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl Default for ConfigGeneral {
    fn default() -> Self {
        Self {
            report_source: None,
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/reviewdeck/config.toml");
    if !path.exists() {
        return Ok(ConfigFile {
            general: ConfigGeneral::default(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
