use std::fmt;

use ssoconf_core::config::{ConfigError, ConfigProperties, PropertyMeta, SsoConfig};
use ssoconf_core::redact;

use crate::settings::{OidcSettings, DEFAULT_SCOPES};

/// Raw OpenID Connect options as populated by the configuration loader.
///
/// Every field may be empty. Interpretation (defaults, URI parsing, the
/// enabled check) lives in [`OidcSettings`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OidcOptions {
    /// Issuer URI, possibly empty or malformed.
    pub uri: String,
    /// Skip TLS certificate verification for the issuer.
    pub insecure: bool,
    /// OAuth client identifier.
    pub client: String,
    /// OAuth client secret.
    pub secret: String,
    /// Space-separated scope list.
    pub scopes: String,
    /// Allow account creation on first OIDC login.
    pub register: bool,
    /// Redirect unauthenticated users straight to the OIDC login.
    pub redirect: bool,
    /// Provider display name.
    pub provider: String,
    /// Provider icon URI.
    pub provider_icon: String,
}

impl OidcOptions {
    /// Accessor view over these options.
    pub fn settings(&self) -> OidcSettings<'_> {
        OidcSettings::new(self)
    }
}

impl fmt::Debug for OidcOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidcOptions")
            .field("uri", &self.uri)
            .field("insecure", &self.insecure)
            .field("client", &self.client)
            .field("secret", &redact(&self.secret))
            .field("scopes", &self.scopes)
            .field("register", &self.register)
            .field("redirect", &self.redirect)
            .field("provider", &self.provider)
            .field("provider_icon", &self.provider_icon)
            .finish()
    }
}

impl ConfigProperties for OidcOptions {
    fn prefix() -> &'static str {
        "oidc"
    }

    fn properties_metadata() -> Vec<PropertyMeta> {
        let prefix = Self::prefix();
        vec![
            PropertyMeta::optional(prefix, "uri", "String", "Issuer URI"),
            PropertyMeta::optional(prefix, "insecure", "bool", "Skip issuer TLS verification")
                .with_default("false"),
            PropertyMeta::optional(prefix, "client", "String", "Client ID"),
            PropertyMeta::optional(prefix, "secret", "String", "Client secret"),
            PropertyMeta::optional(prefix, "scopes", "String", "User information scopes")
                .with_default(DEFAULT_SCOPES),
            PropertyMeta::optional(prefix, "register", "bool", "Allow new accounts via OIDC")
                .with_default("false"),
            PropertyMeta::optional(prefix, "redirect", "bool", "Redirect to the OIDC login page")
                .with_default("false"),
            PropertyMeta::optional(prefix, "provider", "String", "Provider name"),
            PropertyMeta::optional(prefix, "provider_icon", "String", "Provider icon URI"),
        ]
    }

    fn from_config(config: &SsoConfig) -> Result<Self, ConfigError> {
        let string = |key: &str| -> Result<String, ConfigError> {
            Ok(config.get_optional(&format!("oidc.{key}"))?.unwrap_or_default())
        };
        let flag = |key: &str| -> Result<bool, ConfigError> {
            Ok(config.get_optional(&format!("oidc.{key}"))?.unwrap_or(false))
        };

        Ok(OidcOptions {
            uri: string("uri")?,
            insecure: flag("insecure")?,
            client: string("client")?,
            secret: string("secret")?,
            scopes: string("scopes")?,
            register: flag("register")?,
            redirect: flag("redirect")?,
            provider: string("provider")?,
            provider_icon: string("provider_icon")?,
        })
    }
}
