use super::{ConfigError, SsoConfig};

/// Metadata about a single configuration property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMeta {
    /// Relative key (e.g., `"client"`).
    pub key: &'static str,
    /// Absolute key (e.g., `"oidc.client"`).
    pub full_key: String,
    /// Rust type name (e.g., `"String"`).
    pub type_name: &'static str,
    /// Whether the property must be present in the snapshot.
    pub required: bool,
    /// Default value as a string, if any.
    pub default_value: Option<String>,
    /// Human-readable description.
    pub description: Option<&'static str>,
}

impl PropertyMeta {
    /// Optional property under `prefix` with the given type and description.
    pub fn optional(
        prefix: &str,
        key: &'static str,
        type_name: &'static str,
        description: &'static str,
    ) -> Self {
        PropertyMeta {
            key,
            full_key: format!("{prefix}.{key}"),
            type_name,
            required: false,
            default_value: None,
            description: Some(description),
        }
    }

    /// Attach the default that applies when the key is absent.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }
}

/// Trait for strongly-typed configuration sections.
///
/// ```ignore
/// impl ConfigProperties for OidcOptions {
///     fn prefix() -> &'static str { "oidc" }
///     fn properties_metadata() -> Vec<PropertyMeta> { /* ... */ }
///     fn from_config(config: &SsoConfig) -> Result<Self, ConfigError> { /* ... */ }
/// }
/// ```
pub trait ConfigProperties: Sized {
    /// The configuration key prefix (e.g., `"oidc"`).
    fn prefix() -> &'static str;

    /// Metadata about all expected properties.
    fn properties_metadata() -> Vec<PropertyMeta>;

    /// Construct from an `SsoConfig` snapshot.
    fn from_config(config: &SsoConfig) -> Result<Self, ConfigError>;
}
