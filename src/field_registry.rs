use crate::error::CallbackError;

/// A single named input of the callback form.
pub trait Field {
    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);
}

/// Lookup of form fields by their name attribute.
pub trait FieldRegistry {
    fn get(&mut self, name: &str) -> Result<&mut dyn Field, CallbackError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: String,
}

impl Field for MemoryField {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }
}

/// In-memory form. Fields keep the order they were inserted in.
#[derive(Clone, Debug, Default)]
pub struct MemoryFieldRegistry {
    fields: Vec<(String, MemoryField)>,
}

impl MemoryFieldRegistry {
    pub fn new() -> Self {
        MemoryFieldRegistry::default()
    }

    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = MemoryFieldRegistry::new();
        for name in names {
            registry.insert(name);
        }
        registry
    }

    /// Adds an empty field. Inserting an existing name keeps the current field.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.fields.push((name, MemoryField::default()));
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.fields.len();
        self.fields.retain(|(field_name, _)| field_name != name);
        len != self.fields.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field_name, _)| field_name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field.value())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.value()))
    }
}

impl FieldRegistry for MemoryFieldRegistry {
    fn get(&mut self, name: &str) -> Result<&mut dyn Field, CallbackError> {
        self.fields
            .iter_mut()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field as &mut dyn Field)
            .ok_or_else(|| CallbackError::FieldNotFound(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_sets_and_reads_a_field() {
        let mut registry = MemoryFieldRegistry::with_fields(["state"]);

        registry.get("state").unwrap().set_value("xyz");

        assert_eq!(registry.value("state"), Some("xyz"));
    }

    #[test]
    fn it_fails_for_an_unknown_field() {
        let mut registry = MemoryFieldRegistry::with_fields(["state"]);

        let result = registry.get("scope");

        assert!(matches!(result, Err(CallbackError::FieldNotFound(name)) if name == "scope"));
    }

    #[test]
    fn it_keeps_insertion_order_and_ignores_duplicates() {
        let mut registry = MemoryFieldRegistry::with_fields(["b", "a"]);
        registry.get("b").unwrap().set_value("1");
        registry.insert("b");
        registry.insert("c");

        let fields: Vec<(&str, &str)> = registry.iter().collect();

        assert_eq!(fields, vec![("b", "1"), ("a", ""), ("c", "")]);
    }

    #[test]
    fn it_removes_a_field() {
        let mut registry = MemoryFieldRegistry::with_fields(["a", "b"]);

        assert!(registry.remove("a"));
        assert!(!registry.remove("a"));
        assert!(!registry.contains("a"));
        assert!(registry.contains("b"));
    }
}
