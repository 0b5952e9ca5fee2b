//! ssoconf — normalized, secret-safe access to single sign-on settings.
//!
//! This facade crate re-exports the ssoconf sub-crates through a single
//! dependency with feature flags:
//!
//! ```ignore
//! use ssoconf::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Crate          |
//! |---------|---------|----------------|
//! | `oidc`  | **yes** | `ssoconf-oidc` |

pub extern crate ssoconf_core;

pub use ssoconf_core::*;

#[cfg(feature = "oidc")]
pub use ssoconf_oidc;

pub mod prelude {
    //! Re-exports of the most commonly used types.
    pub use ssoconf_core::config::{ConfigError, ConfigProperties, ConfigValue, SsoConfig};
    pub use ssoconf_core::report::{redact, Report, Reportable};

    #[cfg(feature = "oidc")]
    pub use ssoconf_oidc::prelude::*;
}
