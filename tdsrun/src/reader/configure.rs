use serde::Deserialize;
use std::fs;

use tdscli::install_dir;

use super::error::ReaderError;

const CONFIG_FILE: &str = "tdsrun.yaml";

#[derive(Debug, Deserialize)]
struct ConfigRoot {
    pub tdsrun: FileConfig,
}

/// Settings read from `tdsrun.yaml` next to the executable. The file is
/// optional; command-line flags override anything set here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub silent: bool,
    pub debug: bool,
    pub version: Option<String>,
}

pub fn read_config() -> Result<FileConfig, ReaderError> {
    let config_path = install_dir()
        .map_err(|e| ReaderError::BadConfig(e.to_string()))?
        .join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(FileConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| {
        ReaderError::BadConfig(format!("Failed to read {}: {}", config_path.display(), e))
    })?;

    parse_config(&contents).map_err(|e| {
        ReaderError::BadConfig(format!("Failed to read {}: {}", config_path.display(), e))
    })
}

fn parse_config(contents: &str) -> Result<FileConfig, serde_yml::Error> {
    let root: ConfigRoot = serde_yml::from_str(contents)?;
    Ok(root.tdsrun)
}
