use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;

use crate::config_file::{ConfigFile, Profile};
use crate::failure_policy::FailurePolicy;
use crate::output_format::OutputFormat;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about)]
pub struct Arguments {
    /// Full redirect URL, including the `#` fragment. Read from stdin when omitted
    #[arg(env = "FRAGFILL_REDIRECT_URL")]
    pub redirect_url: Option<String>,

    /// Output format of the populated form [default: text]
    #[arg(long, value_enum, env = "FRAGFILL_FORMAT")]
    pub format: Option<OutputFormat>,

    /// What to do when the form misses a callback field [default: collect]
    #[arg(long, value_enum, env = "FRAGFILL_FAILURE_POLICY")]
    pub failure_policy: Option<FailurePolicy>,

    /// Profile from the config file that supplies defaults
    #[arg(long, env = "FRAGFILL_PROFILE")]
    pub profile: Option<String>,

    /// Config file location. Defaults to ~/.fragfill/config.toml
    #[arg(long, env = "FRAGFILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug mode
    #[arg(short, long)]
    pub debug: bool,
}

impl Arguments {
    /// Fills the values that weren't given on the command line or in the environment.
    pub fn apply_profile(&mut self, profile: Profile) {
        if self.redirect_url.is_none() {
            self.redirect_url = profile.redirect_url;
        }

        if self.format.is_none() {
            self.format = profile.format;
        }

        if self.failure_policy.is_none() {
            self.failure_policy = profile.failure_policy;
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy.unwrap_or_default()
    }

    fn config_file(&self) -> Result<ConfigFile> {
        match &self.config {
            Some(path) => Ok(ConfigFile::from(path.to_owned())),
            None => ConfigFile::new(),
        }
    }
}

pub struct Args;

impl Args {
    pub async fn parse() -> Result<Arguments> {
        if dotenv().is_ok() {
            log::debug!("Loaded variables from .env");
        }

        Self::resolve(Arguments::parse()).await
    }

    pub async fn resolve(mut args: Arguments) -> Result<Arguments> {
        if let Some(profile_name) = args.profile.as_deref() {
            let profile = args.config_file()?.profile(Some(profile_name)).await?;
            log::debug!("Applying profile `{}`", profile_name);
            args.apply_profile(profile);
        }

        Ok(args)
    }
}
