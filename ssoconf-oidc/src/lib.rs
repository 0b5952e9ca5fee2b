//! OpenID Connect single sign-on settings.
//!
//! [`OidcOptions`] is the raw record filled in by configuration loading.
//! [`OidcSettings`] is the read-only view the authentication layer consults:
//! it applies the default scopes, parses the issuer URI without ever
//! failing, decides whether SSO is enabled at all, and renders a report with
//! the client secret masked.
//!
//! # Example
//!
//! ```
//! use ssoconf_oidc::OidcOptions;
//!
//! let options = OidcOptions {
//!     uri: "https://idp.example.com".into(),
//!     client: "abc".into(),
//!     secret: "xyz123".into(),
//!     ..Default::default()
//! };
//!
//! let settings = options.settings();
//! assert!(settings.is_enabled());
//! assert_eq!(settings.scopes(), "openid email profile");
//! assert_eq!(settings.report().get("oidc-secret"), Some("******"));
//! ```

pub mod issuer;
pub mod options;
pub mod settings;
pub mod shared;

pub use issuer::{IssuerUri, IssuerUriError};
pub use options::OidcOptions;
pub use settings::{OidcSettings, DEFAULT_SCOPES};
pub use shared::SharedOidcOptions;

pub mod prelude {
    //! Re-exports of the most commonly used OIDC settings types.
    pub use crate::{IssuerUri, OidcOptions, OidcSettings, SharedOidcOptions, DEFAULT_SCOPES};
}
