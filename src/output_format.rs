use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `name=value` line per field
    #[default]
    Text,
    /// JSON object keyed by field name
    Json,
    /// `application/x-www-form-urlencoded` body, as posted with `response_mode=form_post`
    Form,
}
