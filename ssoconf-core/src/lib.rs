//! Core configuration layer for ssoconf.
//!
//! Provides the flat key/value [`SsoConfig`] snapshot that settings sections
//! are built from, the [`ConfigProperties`] contract those sections follow,
//! and the [`Report`] table used to print effective settings without
//! leaking secrets.

pub mod config;
pub mod logging;
pub mod report;

pub use config::{
    ConfigError, ConfigProperties, ConfigValue, FromConfigValue, PropertyMeta, SsoConfig,
};
pub use logging::{init_tracing, try_init_tracing};
pub use report::{redact, Report, ReportRow, Reportable, REPORT_COLUMNS};
