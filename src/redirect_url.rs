use url::Url;

use crate::parameter_set::ParameterSet;

/// Turns the fragment into a query by swapping the first `#` for `?`.
/// Any later `#` stays in place and starts the fragment of the altered URL.
pub fn alter_redirect_url(redirect_url: &str) -> String {
    redirect_url.replacen('#', "?", 1)
}

pub fn parse_parameters(altered_url: &str) -> Result<ParameterSet, url::ParseError> {
    let url = Url::parse(altered_url)?;

    Ok(ParameterSet::from_pairs(url.query_pairs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_replaces_only_the_first_hash() {
        assert_eq!(
            alter_redirect_url("https://a.b/c#x=1#y=2"),
            "https://a.b/c?x=1#y=2"
        );
    }

    #[test]
    fn it_keeps_a_url_without_fragment() {
        assert_eq!(alter_redirect_url("https://a.b/c"), "https://a.b/c");
    }

    #[test]
    fn it_ignores_parameters_after_a_second_hash() {
        let parameters = parse_parameters("https://a.b/c?state=1#scope=2").unwrap();

        assert_eq!(parameters.state.as_deref(), Some("1"));
        assert_eq!(parameters.scope, None);
    }

    #[test]
    fn it_decodes_form_encoded_values() {
        let parameters =
            parse_parameters("https://a.b/c?scope=read+write&state=a%26b%3Dc").unwrap();

        assert_eq!(parameters.scope.as_deref(), Some("read write"));
        assert_eq!(parameters.state.as_deref(), Some("a&b=c"));
    }

    #[test]
    fn it_fails_on_a_relative_url() {
        let result = parse_parameters("/callback?access_token=AAA");

        assert_eq!(result, Err(url::ParseError::RelativeUrlWithoutBase));
    }
}
