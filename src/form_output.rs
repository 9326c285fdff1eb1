use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::field_registry::MemoryFieldRegistry;
use crate::output_format::OutputFormat;

pub struct FormOutput<'a> {
    fields: &'a MemoryFieldRegistry,
}

impl<'a> FormOutput<'a> {
    pub fn new(fields: &'a MemoryFieldRegistry) -> Self {
        FormOutput { fields }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Json => self.json(),
            OutputFormat::Form => Ok(self.form()),
        }
    }

    fn text(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn json(&self) -> Result<String> {
        let object = self
            .fields
            .iter()
            .map(|(name, value)| (name.to_owned(), Value::String(value.to_owned())))
            .collect::<Map<String, Value>>();

        serde_json::to_string_pretty(&object).context("Failed to serialize the form to JSON")
    }

    fn form(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}
