use anyhow::{Context, Result, anyhow};
use std::{collections::HashMap, path::PathBuf};
use tokio::fs;

use serde::{Deserialize, Serialize};

use crate::failure_policy::FailurePolicy;
use crate::output_format::OutputFormat;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// Redirect URL with the implicit grant response in its fragment
    pub redirect_url: Option<String>,

    /// How the populated form gets printed
    pub format: Option<OutputFormat>,

    /// What happens when the form misses one of the callback fields
    pub failure_policy: Option<FailurePolicy>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: HashMap<String, Profile>,
}

pub struct ConfigFile {
    file_path: PathBuf,
}

impl ConfigFile {
    pub fn new() -> Result<ConfigFile> {
        let mut file_path = home::home_dir().context("Couldn't access $HOME_DIR")?;
        file_path.push(".fragfill/config.toml");

        Ok(ConfigFile { file_path })
    }

    pub fn from(file_path: PathBuf) -> ConfigFile {
        ConfigFile { file_path }
    }

    async fn read(&self) -> Config {
        log::debug!("Reading the config file {}", self.file_path.to_string_lossy());
        let text = match fs::read_to_string(&self.file_path).await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Config file not available: {e}");
                return Config::default();
            }
        };

        toml::from_str::<Config>(&text).unwrap_or_else(|e| {
            log::warn!(
                "Cannot parse config file {}. Error: {:?}",
                &self.file_path.to_string_lossy(),
                anyhow!(e)
            );

            Config::default()
        })
    }

    pub async fn profile(&self, profile: Option<&str>) -> Result<Profile> {
        let Some(profile) = profile else {
            return Ok(Profile::default());
        };

        let mut config = self.read().await;

        config
            .profile
            .remove(profile)
            .with_context(|| format!("The given profile `{}` doesn't exist", profile))
    }
}
