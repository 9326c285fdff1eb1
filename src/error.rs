use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("The page has no field named `{0}`")]
    FieldNotFound(String),

    #[error("The page has no fields named: {}", .0.join(", "))]
    FieldsNotFound(Vec<String>),

    /// `missing` holds the fields already found missing before the URL got parsed.
    #[error("`{url}` is not a correct absolute URL{}", missing_suffix(.missing))]
    MalformedUrl {
        url: String,
        missing: Vec<String>,
        #[source]
        source: url::ParseError,
    },
}

fn missing_suffix(missing: &[String]) -> String {
    if missing.is_empty() {
        String::new()
    } else {
        format!(". The page has no fields named: {}", missing.join(", "))
    }
}
