//! # Catalog Configuration
//!
//! Configuration for grocery catalog aggregation.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment overrides (highest priority, looked up by the host)    │
//! │     PANTRY_MEAT_CATEGORY=Viande                                        │
//! │     PANTRY_DUPLICATE_NAMES=reject                                      │
//! │                                                                         │
//! │  2. TOML text supplied by the host application                         │
//! │     (pantry-core never touches the file system)                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     meat_category = "Meat", duplicate_names = last_wins                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Format
//! ```toml
//! # pantry.toml
//! [catalog]
//! meat_category = "Meat"
//! duplicate_names = "last_wins"  # last_wins | reject
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_required;

/// Environment variable overriding [`CatalogSettings::meat_category`].
pub const ENV_MEAT_CATEGORY: &str = "PANTRY_MEAT_CATEGORY";

/// Environment variable overriding [`CatalogSettings::duplicate_names`].
pub const ENV_DUPLICATE_NAMES: &str = "PANTRY_DUPLICATE_NAMES";

// =============================================================================
// Duplicate Name Policy
// =============================================================================

/// What to do when two catalog items share a name.
///
/// ## Policy Comparison
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LAST_WINS (Default)                │  REJECT                           │
/// │  ───────────────────                │  ──────                           │
/// │  • Catalog builds normally          │  • Catalog construction fails     │
/// │  • prices_with_vat keeps the LAST   │    with ValidationError::Duplicate│
/// │    price under the first-seen key   │                                   │
/// │  • Per-item reports still list both │                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    /// Later items overwrite earlier ones in name-keyed maps.
    #[default]
    LastWins,

    /// Duplicate names are a construction error.
    Reject,
}

impl std::fmt::Display for DuplicateNamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateNamePolicy::LastWins => write!(f, "last_wins"),
            DuplicateNamePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for DuplicateNamePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last_wins" | "last-wins" | "last" | "overwrite" => Ok(DuplicateNamePolicy::LastWins),
            "reject" | "error" | "strict" => Ok(DuplicateNamePolicy::Reject),
            other => Err(CoreError::Config(format!(
                "Unknown duplicate name policy: '{}'. Valid options: last_wins, reject",
                other
            ))),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// Aggregation settings for a grocery catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Category treated as meat by `items_with_meat`.
    #[serde(default = "default_meat_category")]
    pub meat_category: String,

    /// Duplicate item name handling.
    #[serde(default)]
    pub duplicate_names: DuplicateNamePolicy,
}

fn default_meat_category() -> String {
    "Meat".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            meat_category: default_meat_category(),
            duplicate_names: DuplicateNamePolicy::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete Pantry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl CatalogConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TOML text. Missing sections and keys fall back to defaults.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::config::{CatalogConfig, DuplicateNamePolicy};
    ///
    /// let config = CatalogConfig::from_toml_str(r#"
    ///     [catalog]
    ///     duplicate_names = "reject"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.meat_category(), "Meat");
    /// assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Reject);
    /// ```
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        let config: CatalogConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the layered configuration: defaults, then `toml` (if any),
    /// then `PANTRY_*` overrides resolved through `env`, then validation.
    ///
    /// The crate never reads the process environment itself; the host
    /// passes the lookup in.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::config::{CatalogConfig, ENV_MEAT_CATEGORY};
    ///
    /// // A host would pass `|key| std::env::var(key).ok()`.
    /// let config = CatalogConfig::load(None, |key| {
    ///     (key == ENV_MEAT_CATEGORY).then(|| "Viande".to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.meat_category(), "Viande");
    /// ```
    pub fn load(toml: Option<&str>, env: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut config = match toml {
            Some(contents) => {
                info!("Loading catalog config from TOML");
                toml::from_str(contents)?
            }
            None => {
                debug!("No catalog config supplied, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `PANTRY_*` overrides on top of current values.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> CoreResult<()> {
        if let Some(category) = lookup(ENV_MEAT_CATEGORY) {
            debug!(meat_category = %category, "Overriding meat category from env");
            self.catalog.meat_category = category;
        }

        if let Some(policy) = lookup(ENV_DUPLICATE_NAMES) {
            let policy: DuplicateNamePolicy = policy.parse()?;
            debug!(%policy, "Overriding duplicate name policy from env");
            self.catalog.duplicate_names = policy;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("meat_category", &self.catalog.meat_category)
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    // =========================================================================
    // Convenience Accessors
    // =========================================================================

    pub fn meat_category(&self) -> &str {
        &self.catalog.meat_category
    }

    pub fn duplicate_names(&self) -> DuplicateNamePolicy {
        self.catalog.duplicate_names
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("last_wins".parse::<DuplicateNamePolicy>().unwrap(), DuplicateNamePolicy::LastWins);
        assert_eq!("Overwrite".parse::<DuplicateNamePolicy>().unwrap(), DuplicateNamePolicy::LastWins);
        assert_eq!("strict".parse::<DuplicateNamePolicy>().unwrap(), DuplicateNamePolicy::Reject);
        assert!("merge".parse::<DuplicateNamePolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [DuplicateNamePolicy::LastWins, DuplicateNamePolicy::Reject] {
            assert_eq!(policy.to_string().parse::<DuplicateNamePolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::new();
        assert_eq!(config.meat_category(), "Meat");
        assert_eq!(config.duplicate_names(), DuplicateNamePolicy::LastWins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [catalog]
            meat_category = "Viande"
            duplicate_names = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.meat_category(), "Viande");
        assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Reject);

        // Empty text means all defaults
        assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            CatalogConfig::from_toml_str("[catalog]\nduplicate_names = \"merge\""),
            Err(CoreError::TomlParse(_))
        ));
        assert!(matches!(
            CatalogConfig::from_toml_str("[catalog]\nmeat_category = \"  \""),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_MEAT_CATEGORY, "Carne"), (ENV_DUPLICATE_NAMES, "reject")]
            .into_iter()
            .collect();

        let mut config = CatalogConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.meat_category(), "Carne");
        assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Reject);
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let mut config = CatalogConfig::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_DUPLICATE_NAMES).then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_load_layers_overrides_over_toml() {
        let toml = "[catalog]\nmeat_category = \"Viande\"\nduplicate_names = \"reject\"";

        let config = CatalogConfig::load(Some(toml), |_| None).unwrap();
        assert_eq!(config.meat_category(), "Viande");

        let config = CatalogConfig::load(Some(toml), |key| {
            (key == ENV_MEAT_CATEGORY).then(|| "Carne".to_string())
        })
        .unwrap();
        assert_eq!(config.meat_category(), "Carne");
        assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Reject);

        assert_eq!(CatalogConfig::load(None, |_| None).unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_load_rejects_blank_override() {
        let result = CatalogConfig::load(None, |key| {
            (key == ENV_MEAT_CATEGORY).then(|| " ".to_string())
        });
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CatalogConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("meat_category = \"Meat\""));
        assert!(text.contains("duplicate_names = \"last_wins\""));
        assert_eq!(CatalogConfig::from_toml_str(&text).unwrap(), config);
    }
}
