//! Configuration management for stackbuilder
//!
//! Settings are loaded from environment variables with sensible defaults. Command-line
//! flags override whatever is loaded here.
//!
//! # Environment Variables
//!
//! - `STACKBUILDER_CATALOG`: Catalog file (.toml or .json) - default: `<config dir>/stackbuilder/catalog.toml`
//!   if it exists, otherwise the built-in catalog
//! - `STACKBUILDER_PACKAGE_MANAGER`: Package manager for `install` (npm|yarn|pnpm) - default: all three
//! - `STACKBUILDER_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use stackbuilder::StackBuilderConfig;
//!
//! let config = StackBuilderConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let catalog = config.load_catalog().expect("Failed to load catalog");
//! println!("{} technologies", catalog.len());
//! ```

use crate::builder::PackageManager;
use crate::stack::{CatalogError, CompatibilityCatalog};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

const DEFAULT_LOG_LEVEL: &str = "info";
const CATALOG_FILE_NAME: &str = "catalog.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid package manager: {0}. Valid options: npm, yarn, pnpm")]
    InvalidPackageManager(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct StackBuilderConfig {
    /// Catalog file; `None` means the built-in catalog
    pub catalog_path: Option<PathBuf>,

    /// Restricts `install` output to one package manager
    pub package_manager: Option<PackageManager>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for StackBuilderConfig {
    /// Loads from STACKBUILDER_* environment variables, falling back to defaults.
    ///
    /// An unparseable `STACKBUILDER_PACKAGE_MANAGER` is logged and ignored; use
    /// [`StackBuilderConfig::from_env`] to surface it as an error instead.
    fn default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, ignoring", e);
                Self {
                    catalog_path: catalog_path_from_env(),
                    package_manager: None,
                    log_level: log_level_from_env(),
                }
            }
        }
    }
}

fn catalog_path_from_env() -> Option<PathBuf> {
    env::var("STACKBUILDER_CATALOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| default_catalog_path().filter(|p| p.is_file()))
}

fn log_level_from_env() -> String {
    env::var("STACKBUILDER_LOG_LEVEL")
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
        .to_lowercase()
}

/// `<config dir>/stackbuilder/catalog.toml`, if the platform has a config dir
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stackbuilder").join(CATALOG_FILE_NAME))
}

impl StackBuilderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let package_manager = match env::var("STACKBUILDER_PACKAGE_MANAGER") {
            Ok(value) if !value.trim().is_empty() => Some(
                value
                    .parse::<PackageManager>()
                    .map_err(|_| ConfigError::InvalidPackageManager(value.clone()))?,
            ),
            _ => None,
        };

        Ok(Self {
            catalog_path: catalog_path_from_env(),
            package_manager,
            log_level: log_level_from_env(),
        })
    }

    /// Checks that the log level is valid and that a configured catalog file exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if let Some(path) = &self.catalog_path {
            if !path.is_file() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Catalog file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn load_catalog(&self) -> Result<CompatibilityCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => CompatibilityCatalog::from_file(path),
            None => Ok(CompatibilityCatalog::with_defaults()),
        }
    }

    /// Package managers `install` should render
    pub fn package_managers(&self) -> Vec<PackageManager> {
        match self.package_manager {
            Some(pm) => vec![pm],
            None => PackageManager::ALL.to_vec(),
        }
    }

    pub fn to_display_map(&self) -> std::collections::BTreeMap<String, String> {
        let mut map = std::collections::BTreeMap::new();

        map.insert(
            "catalog".to_string(),
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()),
        );
        map.insert(
            "package_manager".to_string(),
            self.package_manager
                .map(|pm| pm.to_string())
                .unwrap_or_else(|| "all".to_string()),
        );
        map.insert("log_level".to_string(), self.log_level.clone());

        map
    }
}

impl fmt::Display for StackBuilderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackbuilder Configuration:")?;
        match &self.catalog_path {
            Some(path) => writeln!(f, "  Catalog: {}", path.display())?,
            None => writeln!(f, "  Catalog: built-in")?,
        }
        match self.package_manager {
            Some(pm) => writeln!(f, "  Package Manager: {}", pm)?,
            None => writeln!(f, "  Package Manager: all")?,
        }
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = dir.path().join("catalog.toml");
        std::fs::write(&catalog, "").unwrap();

        let _guards = vec![
            EnvGuard::set("STACKBUILDER_CATALOG", catalog.to_str().unwrap()),
            EnvGuard::set("STACKBUILDER_PACKAGE_MANAGER", "pnpm"),
            EnvGuard::set("STACKBUILDER_LOG_LEVEL", "DEBUG"),
        ];

        let config = StackBuilderConfig::from_env().unwrap();
        assert_eq!(config.catalog_path, Some(catalog));
        assert_eq!(config.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(config.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_invalid_package_manager() {
        let _guard = EnvGuard::set("STACKBUILDER_PACKAGE_MANAGER", "bun");

        assert!(matches!(
            StackBuilderConfig::from_env(),
            Err(ConfigError::InvalidPackageManager(_))
        ));

        let config = StackBuilderConfig::default();
        assert_eq!(config.package_manager, None);
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = StackBuilderConfig {
            catalog_path: None,
            package_manager: None,
            log_level: "loud".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_catalog() {
        let config = StackBuilderConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
            package_manager: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_load_builtin_catalog() {
        let config = StackBuilderConfig {
            catalog_path: None,
            package_manager: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        };
        let catalog = config.load_catalog().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_package_managers() {
        let mut config = StackBuilderConfig {
            catalog_path: None,
            package_manager: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        };
        assert_eq!(config.package_managers(), PackageManager::ALL.to_vec());

        config.package_manager = Some(PackageManager::Yarn);
        assert_eq!(config.package_managers(), vec![PackageManager::Yarn]);
    }

    #[test]
    fn test_config_display() {
        let config = StackBuilderConfig {
            catalog_path: None,
            package_manager: Some(PackageManager::Npm),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        };
        let display = format!("{}", config);
        assert!(display.contains("Stackbuilder Configuration:"));
        assert!(display.contains("Catalog: built-in"));
        assert!(display.contains("Package Manager: npm"));

        let map = config.to_display_map();
        assert_eq!(map.get("catalog").map(String::as_str), Some("built-in"));
    }
}
