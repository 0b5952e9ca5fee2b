use std::sync::Arc;

use arc_swap::ArcSwap;
use ssoconf_core::config::{ConfigError, ConfigProperties, SsoConfig};
use tracing::debug;

use crate::options::OidcOptions;

/// Shared handle to the current [`OidcOptions`].
///
/// The configuration loader is the single writer; authentication and
/// reporting code are readers. Readers take a [`snapshot`](Self::snapshot)
/// and keep using it for the duration of their work, so a concurrent
/// reload never changes values underneath them.
#[derive(Clone, Debug)]
pub struct SharedOidcOptions {
    current: Arc<ArcSwap<OidcOptions>>,
}

impl SharedOidcOptions {
    pub fn new(options: OidcOptions) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(options)),
        }
    }

    /// Build from the `oidc.*` keys of a configuration snapshot.
    pub fn from_config(config: &SsoConfig) -> Result<Self, ConfigError> {
        OidcOptions::from_config(config).map(Self::new)
    }

    /// The options currently in effect.
    pub fn snapshot(&self) -> Arc<OidcOptions> {
        self.current.load_full()
    }

    /// Swap in new options. Existing snapshots are unaffected.
    pub fn replace(&self, options: OidcOptions) {
        let enabled = options.settings().is_enabled();
        self.current.store(Arc::new(options));
        debug!(enabled, "oidc: options replaced");
    }

    /// Rebuild from a configuration snapshot.
    ///
    /// On error the options in effect are left untouched.
    pub fn reload(&self, config: &SsoConfig) -> Result<(), ConfigError> {
        let options = OidcOptions::from_config(config)?;
        self.replace(options);
        Ok(())
    }
}

impl Default for SharedOidcOptions {
    fn default() -> Self {
        Self::new(OidcOptions::default())
    }
}
