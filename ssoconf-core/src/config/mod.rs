mod loader;
pub mod typed;
pub mod value;

use std::collections::HashMap;
use std::ops::Deref;

pub use typed::{ConfigProperties, PropertyMeta};
pub use value::{ConfigValue, FromConfigValue};

/// Error type for configuration snapshot operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The requested key was not found in the snapshot.
    NotFound(String),
    /// The value could not be converted to the requested type.
    TypeMismatch { key: String, expected: &'static str },
    /// The in-memory YAML document could not be parsed.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A flat, dotted-key snapshot of application configuration.
///
/// `SsoConfig` (= `SsoConfig<()>`) provides raw key-value access only.
/// `SsoConfig<T>` adds typed access to a section struct via `Deref<Target = T>`.
///
/// The snapshot is populated by whoever owns configuration loading: either
/// key by key through [`SsoConfig::set`], or from an in-memory YAML document
/// through [`SsoConfig::from_yaml_str`]. Nothing here touches the filesystem
/// or the process environment.
#[derive(Debug, Clone, Default)]
pub struct SsoConfig<T = ()> {
    values: HashMap<String, ConfigValue>,
    typed: T,
}

// ── Constructors — only on SsoConfig (= SsoConfig<()>) ─────────────────

impl SsoConfig {
    /// Create an empty snapshot.
    pub fn empty() -> Self {
        SsoConfig {
            values: HashMap::new(),
            typed: (),
        }
    }

    /// Build a snapshot from a YAML document, flattening nested mappings
    /// into dotted keys (`oidc: { client: x }` becomes `oidc.client`).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(SsoConfig { values, typed: () })
    }

    /// Set a value programmatically.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Remove a value, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    /// Upgrade to a typed snapshot by constructing `C` from the raw values.
    ///
    /// ```ignore
    /// let config = SsoConfig::from_yaml_str(yaml)?.with_typed::<OidcOptions>()?;
    /// config.client  // typed field access via Deref
    /// config.get::<String>("oidc.client")  // raw access still works
    /// ```
    pub fn with_typed<C: ConfigProperties>(self) -> Result<SsoConfig<C>, ConfigError> {
        let typed = C::from_config(&self)?;
        Ok(SsoConfig {
            values: self.values,
            typed,
        })
    }
}

// ── Methods available on all SsoConfig<T> ───────────────────────────────

impl<T> SsoConfig<T> {
    /// Get a typed value for the given dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, returning a default if the key is missing or
    /// cannot be converted.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    /// Get a typed value if the key is present.
    ///
    /// Unlike [`get_or`](Self::get_or), a present value of the wrong type is
    /// reported as an error rather than silently replaced.
    pub fn get_optional<V: FromConfigValue>(&self, key: &str) -> Result<Option<V>, ConfigError> {
        match self.values.get(key) {
            None | Some(ConfigValue::Null) => Ok(None),
            Some(value) => V::from_config_value(value, key).map(Some),
        }
    }

    /// Check whether a key exists in the snapshot.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys in the snapshot, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Get a reference to the typed layer.
    pub fn typed(&self) -> &T {
        &self.typed
    }

    /// Downgrade to a raw (untyped) snapshot, discarding the typed layer.
    pub fn raw(&self) -> SsoConfig {
        SsoConfig {
            values: self.values.clone(),
            typed: (),
        }
    }
}

// ── Deref for ergonomic typed field access ──────────────────────────────

impl<T> Deref for SsoConfig<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.typed
    }
}
