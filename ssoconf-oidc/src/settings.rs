use ssoconf_core::{redact, Report, Reportable};
use tracing::error;

use crate::issuer::IssuerUri;
use crate::options::OidcOptions;

/// Scopes requested when none are configured.
pub const DEFAULT_SCOPES: &str = "openid email profile";

/// Read-only view over [`OidcOptions`] that applies defaults and parsing.
///
/// Every accessor is a pure function of the borrowed options. The only
/// side effect is an error log when the issuer URI does not parse.
#[derive(Clone, Copy, Debug)]
pub struct OidcSettings<'a> {
    options: &'a OidcOptions,
}

impl<'a> OidcSettings<'a> {
    pub fn new(options: &'a OidcOptions) -> Self {
        Self { options }
    }

    /// Whether login via OpenID Connect is enabled.
    ///
    /// Requires an issuer URI, a client ID and a client secret. Authentication
    /// must check this before offering single sign-on.
    pub fn is_enabled(&self) -> bool {
        !self.options.uri.is_empty()
            && !self.options.client.is_empty()
            && !self.options.secret.is_empty()
    }

    /// The issuer URI.
    ///
    /// Returns the zero value when unset. A value that fails to parse is
    /// logged and also yields the zero value; it is never reported as an error.
    pub fn issuer_uri(&self) -> IssuerUri {
        IssuerUri::parse(&self.options.uri).unwrap_or_else(|err| {
            error!(error = %err, "oidc: failed to parse issuer URI");
            IssuerUri::default()
        })
    }

    /// Whether issuer TLS certificate verification should be skipped.
    pub fn insecure_tls(&self) -> bool {
        self.options.insecure
    }

    pub fn client_id(&self) -> &'a str {
        &self.options.client
    }

    pub fn client_secret(&self) -> &'a str {
        &self.options.secret
    }

    /// User information scopes, [`DEFAULT_SCOPES`] if none are configured.
    pub fn scopes(&self) -> &'a str {
        if self.options.scopes.is_empty() {
            DEFAULT_SCOPES
        } else {
            &self.options.scopes
        }
    }

    /// Whether new accounts may be created via OIDC.
    pub fn allow_register(&self) -> bool {
        self.options.register
    }

    /// Whether unauthenticated users are sent straight to the OIDC login page.
    pub fn auto_redirect(&self) -> bool {
        self.options.redirect
    }

    pub fn provider_name(&self) -> &'a str {
        &self.options.provider
    }

    pub fn provider_icon_uri(&self) -> &'a str {
        &self.options.provider_icon
    }

    /// Effective settings as a name/value table. The secret is masked.
    pub fn report(&self) -> Report {
        let mut report = Report::new();
        report
            .push("oidc-uri", self.issuer_uri().to_string())
            .push("oidc-insecure", self.insecure_tls().to_string())
            .push("oidc-client", self.client_id())
            .push("oidc-secret", redact(self.client_secret()))
            .push("oidc-scopes", self.scopes())
            .push("oidc-register", self.allow_register().to_string())
            .push("oidc-redirect", self.auto_redirect().to_string())
            .push("oidc-provider", self.provider_name())
            .push("oidc-provider-icon", self.provider_icon_uri());
        report
    }
}

impl Reportable for OidcSettings<'_> {
    fn report(&self) -> Report {
        OidcSettings::report(self)
    }
}

impl Reportable for OidcOptions {
    fn report(&self) -> Report {
        self.settings().report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_disabled() {
        let options = OidcOptions::default();
        let settings = options.settings();

        assert!(!settings.is_enabled());
        assert!(settings.issuer_uri().is_empty());
        assert!(!settings.insecure_tls());
        assert_eq!(settings.client_id(), "");
        assert_eq!(settings.client_secret(), "");
        assert_eq!(settings.scopes(), DEFAULT_SCOPES);
        assert!(!settings.allow_register());
        assert!(!settings.auto_redirect());
        assert_eq!(settings.provider_name(), "");
        assert_eq!(settings.provider_icon_uri(), "");
    }

    #[test]
    fn enabled_needs_uri_client_and_secret() {
        let full = OidcOptions {
            uri: "https://idp.example.com".into(),
            client: "abc".into(),
            secret: "xyz123".into(),
            ..Default::default()
        };
        assert!(full.settings().is_enabled());

        let clears: [fn(&mut OidcOptions); 3] = [
            |o| o.uri.clear(),
            |o| o.client.clear(),
            |o| o.secret.clear(),
        ];
        for clear in clears {
            let mut partial = full.clone();
            clear(&mut partial);
            assert!(!partial.settings().is_enabled());
        }
    }

    #[test]
    fn scopes_revert_to_default_when_cleared() {
        let mut options = OidcOptions {
            scopes: "openid email".into(),
            ..Default::default()
        };
        assert_eq!(options.settings().scopes(), "openid email");

        options.scopes.clear();
        assert_eq!(options.settings().scopes(), DEFAULT_SCOPES);
    }
}
