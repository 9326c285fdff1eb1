use anyhow::Result;

type ReadyCallback<C> = Box<dyn FnOnce(&mut C) -> Result<()>>;

/// One-shot initialization hook fired by the host once its fields exist.
pub struct ReadyHook<C> {
    callbacks: Vec<ReadyCallback<C>>,
    fired: bool,
}

impl<C> ReadyHook<C> {
    pub fn new() -> Self {
        ReadyHook {
            callbacks: Vec::new(),
            fired: false,
        }
    }

    pub fn on_ready<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut C) -> Result<()> + 'static,
    {
        if self.fired {
            log::warn!("Ready hook already fired. Ignoring a late callback");
            return;
        }

        self.callbacks.push(Box::new(callback));
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Runs the registered callbacks in order. Returns `false` when the hook has fired before.
    pub fn fire(&mut self, context: &mut C) -> Result<bool> {
        if self.fired {
            log::debug!("Ready hook already fired");
            return Ok(false);
        }

        self.fired = true;
        log::debug!("Firing {} ready callback(s)", self.callbacks.len());

        for callback in self.callbacks.drain(..) {
            callback(context)?;
        }

        Ok(true)
    }
}

impl<C> Default for ReadyHook<C> {
    fn default() -> Self {
        ReadyHook::new()
    }
}
