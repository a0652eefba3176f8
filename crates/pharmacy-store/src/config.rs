//! # Store Configuration
//!
//! Where the backing files live and how the stores treat bad input.
//!
//! ## Configuration File Format
//! ```toml
//! # pharmacy.toml
//! data_dir = "data"            # relative paths resolve next to this file
//! medicine_file = "Medicine.txt"
//! customer_file = "Customer.txt"
//! order_file = "Order.txt"
//! malformed_lines = "skip"     # skip | abort
//! references = "unchecked"     # unchecked | enforce
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Policies
// =============================================================================

/// What loading does with a line that isn't a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// Skip the line, log it, and list it in the load report.
    #[default]
    Skip,

    /// Fail the whole load and keep the previous in-memory set.
    Abort,
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLinePolicy::Skip => write!(f, "skip"),
            MalformedLinePolicy::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(MalformedLinePolicy::Skip),
            "abort" | "fail" => Ok(MalformedLinePolicy::Abort),
            other => Err(format!(
                "Unknown malformed line policy: '{}'. Valid options: skip, abort",
                other
            )),
        }
    }
}

/// Whether placing an order checks its customer and medicine ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Store the ids as given. An id typed by hand may dangle.
    #[default]
    Unchecked,

    /// Reject an order whose ids are missing from the other stores'
    /// identifier lists.
    Enforce,
}

impl ReferencePolicy {
    pub fn is_enforced(&self) -> bool {
        matches!(self, ReferencePolicy::Enforce)
    }
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePolicy::Unchecked => write!(f, "unchecked"),
            ReferencePolicy::Enforce => write!(f, "enforce"),
        }
    }
}

impl FromStr for ReferencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unchecked" | "off" => Ok(ReferencePolicy::Unchecked),
            "enforce" | "on" => Ok(ReferencePolicy::Enforce),
            other => Err(format!(
                "Unknown reference policy: '{}'. Valid options: unchecked, enforce",
                other
            )),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Configuration for the three stores.
///
/// ## Example
/// ```rust
/// use pharmacy_store::{ReferencePolicy, StoreConfig};
///
/// let config = StoreConfig::new("/var/lib/pharmacy")
///     .references(ReferencePolicy::Enforce);
///
/// assert!(config.medicine_path().ends_with("Medicine.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the backing files.
    pub data_dir: PathBuf,

    /// Medicine file name, relative to `data_dir`.
    pub medicine_file: String,

    /// Customer file name, relative to `data_dir`.
    pub customer_file: String,

    /// Order file name, relative to `data_dir`.
    pub order_file: String,

    pub malformed_lines: MalformedLinePolicy,

    pub references: ReferencePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("."),
            medicine_file: "Medicine.txt".to_string(),
            customer_file: "Customer.txt".to_string(),
            order_file: "Order.txt".to_string(),
            malformed_lines: MalformedLinePolicy::default(),
            references: ReferencePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with default file names under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            ..StoreConfig::default()
        }
    }

    /// Sets the medicine file name.
    pub fn medicine_file(mut self, name: impl Into<String>) -> Self {
        self.medicine_file = name.into();
        self
    }

    /// Sets the customer file name.
    pub fn customer_file(mut self, name: impl Into<String>) -> Self {
        self.customer_file = name.into();
        self
    }

    /// Sets the order file name.
    pub fn order_file(mut self, name: impl Into<String>) -> Self {
        self.order_file = name.into();
        self
    }

    /// Sets the malformed line policy.
    pub fn malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    /// Sets the order reference policy.
    pub fn references(mut self, policy: ReferencePolicy) -> Self {
        self.references = policy;
        self
    }

    pub fn medicine_path(&self) -> PathBuf {
        self.data_dir.join(&self.medicine_file)
    }

    pub fn customer_path(&self) -> PathBuf {
        self.data_dir.join(&self.customer_file)
    }

    pub fn order_path(&self) -> PathBuf {
        self.data_dir.join(&self.order_file)
    }

    /// Parses TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reads a TOML file.
    ///
    /// A relative `data_dir` is resolved against the directory containing
    /// the file, so a config can sit next to its data.
    pub fn from_toml_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_toml_str(&contents).map_err(|e| StoreError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }

        debug!(?path, data_dir = %config.data_dir.display(), "Loaded store config");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::new("/data");
        assert_eq!(config.medicine_path(), PathBuf::from("/data/Medicine.txt"));
        assert_eq!(config.customer_path(), PathBuf::from("/data/Customer.txt"));
        assert_eq!(config.order_path(), PathBuf::from("/data/Order.txt"));
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Skip);
        assert_eq!(config.references, ReferencePolicy::Unchecked);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("/data")
            .medicine_file("meds.csv")
            .malformed_lines(MalformedLinePolicy::Abort)
            .references(ReferencePolicy::Enforce);

        assert_eq!(config.medicine_path(), PathBuf::from("/data/meds.csv"));
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Abort);
        assert!(config.references.is_enforced());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("skip".parse::<MalformedLinePolicy>().unwrap(), MalformedLinePolicy::Skip);
        assert_eq!("ABORT".parse::<MalformedLinePolicy>().unwrap(), MalformedLinePolicy::Abort);
        assert!("maybe".parse::<MalformedLinePolicy>().is_err());

        assert_eq!("enforce".parse::<ReferencePolicy>().unwrap(), ReferencePolicy::Enforce);
        assert_eq!("off".parse::<ReferencePolicy>().unwrap(), ReferencePolicy::Unchecked);
        assert!("strict".parse::<ReferencePolicy>().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            data_dir = "/srv/pharmacy"
            references = "enforce"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/pharmacy"));
        assert_eq!(config.references, ReferencePolicy::Enforce);
        assert_eq!(config.order_file, "Order.txt");
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Skip);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StoreConfig::new("/data").references(ReferencePolicy::Enforce);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("references = \"enforce\""));
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_toml_file_resolves_relative_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pharmacy.toml");
        std::fs::write(&path, "data_dir = \"records\"\n").unwrap();

        let config = StoreConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.data_dir, dir.path().join("records"));
    }

    #[test]
    fn test_toml_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            StoreConfig::from_toml_file(&missing),
            Err(StoreError::Config { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "references = \"sometimes\"\n").unwrap();
        assert!(matches!(
            StoreConfig::from_toml_file(&bad),
            Err(StoreError::Config { .. })
        ));
    }
}
