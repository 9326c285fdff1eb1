use anyhow::{Context, Result};

use crate::failure_policy::FailurePolicy;
use crate::field_registry::MemoryFieldRegistry;
use crate::parameter_set::{PARAMETER_NAMES, REDIRECT_URL_FIELD};
use crate::populator::RedirectFieldPopulator;
use crate::ready_hook::ReadyHook;

/// What ready callbacks get to work with: the current location and the form.
pub struct Document {
    pub location: String,
    pub fields: MemoryFieldRegistry,
}

/// Page the authorization server redirects back to.
pub struct CallbackPage {
    document: Document,
    hook: ReadyHook<Document>,
}

impl CallbackPage {
    /// A page with the six empty callback fields.
    pub fn new(location: impl Into<String>) -> Self {
        let mut fields = MemoryFieldRegistry::new();
        fields.insert(REDIRECT_URL_FIELD);
        for name in PARAMETER_NAMES {
            fields.insert(name);
        }

        Self::with_fields(location, fields)
    }

    pub fn with_fields(location: impl Into<String>, fields: MemoryFieldRegistry) -> Self {
        CallbackPage {
            document: Document {
                location: location.into(),
                fields,
            },
            hook: ReadyHook::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.document.location
    }

    pub fn fields(&self) -> &MemoryFieldRegistry {
        &self.document.fields
    }

    pub fn on_ready<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut Document) -> Result<()> + 'static,
    {
        self.hook.on_ready(callback);
    }

    pub fn install_populator(&mut self, policy: FailurePolicy) {
        self.on_ready(move |document| {
            RedirectFieldPopulator::new(policy)
                .populate(&document.location, &mut document.fields)
                .context("Failed to populate the callback form")?;
            Ok(())
        });
    }

    /// Finishes loading the page. Only the first call fires the ready callbacks.
    pub fn load(&mut self) -> Result<bool> {
        log::debug!("Loading callback page {}", self.document.location);
        self.hook.fire(&mut self.document)
    }
}
