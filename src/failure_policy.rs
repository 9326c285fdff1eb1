use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Write every field that exists and report all missing ones at the end
    #[default]
    Collect,
    /// Stop at the first missing field
    FailFast,
}
