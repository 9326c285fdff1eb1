/// Name of the field that receives the untouched redirect URL.
pub const REDIRECT_URL_FIELD: &str = "redirect_url";

/// Implicit grant response parameters, in the order their fields are written.
pub const PARAMETER_NAMES: [&str; 5] = ["access_token", "expires_in", "token_type", "scope", "state"];

/// Written into a field when its parameter is missing from the fragment.
pub const NULL_PLACEHOLDER: &str = "null";

/// Implicit grant response. More: <https://www.rfc-editor.org/rfc/rfc6749#section-4.2.2>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pub access_token: Option<String>,

    pub expires_in: Option<String>,

    pub token_type: Option<String>,

    pub scope: Option<String>,

    pub state: Option<String>,
}

impl ParameterSet {
    /// Builds the set from decoded query pairs. The first value of a repeated name wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> ParameterSet
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut parameters = ParameterSet::default();

        for (name, value) in pairs {
            if let Some(slot) = parameters.slot_mut(name.as_ref()) {
                if slot.is_none() {
                    *slot = Some(value.into());
                }
            }
        }

        parameters
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "access_token" => self.access_token.as_deref(),
            "expires_in" => self.expires_in.as_deref(),
            "token_type" => self.token_type.as_deref(),
            "scope" => self.scope.as_deref(),
            "state" => self.state.as_deref(),
            _ => None,
        }
    }

    /// The value written into the field named `name`.
    pub fn value_or_placeholder(&self, name: &str) -> &str {
        self.get(name).unwrap_or(NULL_PLACEHOLDER)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "access_token" => Some(&mut self.access_token),
            "expires_in" => Some(&mut self.expires_in),
            "token_type" => Some(&mut self.token_type),
            "scope" => Some(&mut self.scope),
            "state" => Some(&mut self.state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_the_first_value_of_a_repeated_parameter() {
        let parameters =
            ParameterSet::from_pairs([("state", "first"), ("state", "second"), ("other", "x")]);

        assert_eq!(parameters.state.as_deref(), Some("first"));
        assert_eq!(parameters.get("other"), None);
    }

    #[test]
    fn it_uses_the_placeholder_for_absent_parameters() {
        let parameters = ParameterSet::from_pairs([("scope", "")]);

        assert_eq!(parameters.value_or_placeholder("scope"), "");
        assert_eq!(parameters.value_or_placeholder("access_token"), "null");
    }
}
