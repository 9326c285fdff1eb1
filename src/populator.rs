use crate::error::CallbackError;
use crate::failure_policy::FailurePolicy;
use crate::field_registry::FieldRegistry;
use crate::parameter_set::{PARAMETER_NAMES, ParameterSet, REDIRECT_URL_FIELD};
use crate::redirect_url::{alter_redirect_url, parse_parameters};

/// Copies an implicit grant redirect into the callback form.
///
/// `redirect_url` is written first and verbatim. A URL that cannot be parsed
/// aborts before any of the five parameter fields is touched, so those keep
/// whatever value they had.
pub struct RedirectFieldPopulator {
    policy: FailurePolicy,
}

impl RedirectFieldPopulator {
    pub fn new(policy: FailurePolicy) -> Self {
        RedirectFieldPopulator { policy }
    }

    pub fn populate(
        &self,
        redirect_url: &str,
        registry: &mut dyn FieldRegistry,
    ) -> Result<ParameterSet, CallbackError> {
        log::debug!("Populating fields from {}", redirect_url);
        let mut missing = Vec::new();

        self.write(registry, REDIRECT_URL_FIELD, redirect_url, &mut missing)?;

        let altered_url = alter_redirect_url(redirect_url);
        log::debug!("Altered redirect url: {}", altered_url);

        let parameters =
            parse_parameters(&altered_url).map_err(|source| CallbackError::MalformedUrl {
                url: redirect_url.to_owned(),
                missing: missing.clone(),
                source,
            })?;

        for name in PARAMETER_NAMES {
            self.write(
                registry,
                name,
                parameters.value_or_placeholder(name),
                &mut missing,
            )?;
        }

        if missing.is_empty() {
            Ok(parameters)
        } else {
            Err(CallbackError::FieldsNotFound(missing))
        }
    }

    fn write(
        &self,
        registry: &mut dyn FieldRegistry,
        name: &str,
        value: &str,
        missing: &mut Vec<String>,
    ) -> Result<(), CallbackError> {
        match registry.get(name) {
            Ok(field) => {
                log::debug!("Setting `{}` field", name);
                field.set_value(value);
                Ok(())
            }
            Err(e) => match self.policy {
                FailurePolicy::FailFast => Err(e),
                FailurePolicy::Collect => {
                    log::error!("{e}. Continuing with the remaining fields");
                    missing.push(name.to_owned());
                    Ok(())
                }
            },
        }
    }
}

impl Default for RedirectFieldPopulator {
    fn default() -> Self {
        RedirectFieldPopulator::new(FailurePolicy::default())
    }
}
