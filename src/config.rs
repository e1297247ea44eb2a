//! Run configuration for qualified Dublin Core export.
//!
//! [`ExportConfig`] holds the settings that stay fixed for one export run:
//! file exposure, suppressed collections, the publisher exclusion list,
//! whether the geolocation capability is active, and whether the unrefined
//! view is offered. It can be built in code, read from JSON, or read from the
//! host's option store under the host's option names.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QdcError, Result};
use crate::vocabulary::normalize_key;

/// Host option: expose file links in harvested records.
pub const OPTION_EXPOSE_FILES: &str = "oaipmh_repository_expose_files";
/// Host option: comma-separated collection ids whose files stay hidden.
pub const OPTION_EXCLUDE_COLLECTIONS: &str = "dublin_core_exclude_collections";
/// Host option: comma-separated publisher names redirected to `mediator`.
pub const OPTION_EXCLUDE_PUBLISHERS: &str = "dublin_core_exclude_publishers";
/// Host option: the geolocation capability is installed and active.
pub const OPTION_GEOLOCATION: &str = "geolocation_active";
/// Host option: offer refined elements folded into the fifteen base elements.
pub const OPTION_UNREFINED_DC: &str = "dublin_core_extended_oaipmh_unrefined_dc";

/// Read access to the host's option store.
pub trait OptionStore {
    /// Raw value of an option, `None` when unset.
    fn option(&self, name: &str) -> Option<String>;
}

impl OptionStore for HashMap<String, String> {
    fn option(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Configuration for one export run.
///
/// # Examples
///
/// ```
/// use qdc_extended::config::ExportConfig;
///
/// let config = ExportConfig::new()
///     .with_file_exposure(true)
///     .with_suppressed_collections("3, 7")
///     .with_publisher_exclusions(["Kirjastovirma"]);
///
/// assert!(config.is_suppressed(Some("7")));
/// assert!(config.is_excluded_publisher("kirjastovirma"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExportConfig {
    /// Emit `kk:file` links for attached files.
    pub expose_files: bool,

    /// Collections whose items must not expose files or resolver addresses.
    pub suppressed_collections: Vec<String>,

    /// Publisher names emitted as `dcterms:mediator` instead of `dc:publisher`.
    pub publisher_exclusions: Vec<String>,

    /// The geolocation capability is available for this run.
    pub geolocation: bool,

    /// Offer the unrefined Dublin Core view alongside the qualified one.
    pub unrefined_dc: bool,
}

impl ExportConfig {
    /// Creates a new configuration with everything disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables file links.
    #[must_use]
    pub const fn with_file_exposure(mut self, enabled: bool) -> Self {
        self.expose_files = enabled;
        self
    }

    /// Sets the suppressed collections from a comma-separated id list.
    #[must_use]
    pub fn with_suppressed_collections(mut self, list: &str) -> Self {
        self.suppressed_collections = parse_list(list);
        self
    }

    /// Sets the publisher exclusion list.
    #[must_use]
    pub fn with_publisher_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.publisher_exclusions = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        self
    }

    /// Marks the geolocation capability as active.
    #[must_use]
    pub const fn with_geolocation(mut self, enabled: bool) -> Self {
        self.geolocation = enabled;
        self
    }

    /// Enables the unrefined view.
    #[must_use]
    pub const fn with_unrefined_dc(mut self, enabled: bool) -> Self {
        self.unrefined_dc = enabled;
        self
    }

    /// Reads the configuration from the host's option store.
    ///
    /// Unset options fall back to the defaults; nothing here can fail.
    #[must_use]
    pub fn from_options(store: &impl OptionStore) -> Self {
        let list = |name| store.option(name).map(|v| parse_list(&v)).unwrap_or_default();
        let flag = |name| store.option(name).is_some_and(|v| parse_flag(&v));
        ExportConfig {
            expose_files: flag(OPTION_EXPOSE_FILES),
            suppressed_collections: list(OPTION_EXCLUDE_COLLECTIONS),
            publisher_exclusions: list(OPTION_EXCLUDE_PUBLISHERS),
            geolocation: flag(OPTION_GEOLOCATION),
            unrefined_dc: flag(OPTION_UNREFINED_DC),
        }
    }

    /// Parses the configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`QdcError::InvalidConfig`] if the document is not a
    /// configuration object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| QdcError::InvalidConfig(e.to_string()))
    }

    /// Reads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns true if items of `collection_id` are suppressed.
    ///
    /// An empty suppression list never suppresses anything.
    #[must_use]
    pub fn is_suppressed(&self, collection_id: Option<&str>) -> bool {
        collection_id.is_some_and(|id| {
            let id = id.trim();
            self.suppressed_collections.iter().any(|c| c == id)
        })
    }

    /// Returns true if `publisher` is on the exclusion list.
    #[must_use]
    pub fn is_excluded_publisher(&self, publisher: &str) -> bool {
        let key = normalize_key(publisher);
        self.publisher_exclusions
            .iter()
            .any(|name| normalize_key(name) == key)
    }
}

/// Split a comma-separated option value, dropping blank entries.
#[must_use]
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert!(!config.expose_files);
        assert!(config.suppressed_collections.is_empty());
        assert!(config.publisher_exclusions.is_empty());
        assert!(!config.geolocation);
        assert!(!config.unrefined_dc);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExportConfig::new()
            .with_file_exposure(true)
            .with_suppressed_collections("1,,2 ")
            .with_publisher_exclusions(["  Kirjasto  ", ""])
            .with_geolocation(true);

        assert!(config.expose_files);
        assert_eq!(config.suppressed_collections, vec!["1", "2"]);
        assert_eq!(config.publisher_exclusions, vec!["Kirjasto"]);
        assert!(config.geolocation);
    }

    #[test]
    fn test_empty_suppression_list_never_suppresses() {
        let config = ExportConfig::new();
        assert!(!config.is_suppressed(Some("1")));
        assert!(!config.is_suppressed(None));
    }

    #[test]
    fn test_suppression_matches_exact_id() {
        let config = ExportConfig::new().with_suppressed_collections("4,12");
        assert!(config.is_suppressed(Some("12")));
        assert!(config.is_suppressed(Some(" 4 ")));
        assert!(!config.is_suppressed(Some("1")));
        assert!(!config.is_suppressed(None));
    }

    #[test]
    fn test_publisher_exclusion_is_normalized() {
        let config = ExportConfig::new().with_publisher_exclusions(["Kirjastovirma"]);
        assert!(config.is_excluded_publisher("  KIRJASTOVIRMA "));
        assert!(!config.is_excluded_publisher("Otava"));
    }

    #[test]
    fn test_from_options() {
        let mut options = HashMap::new();
        options.insert(OPTION_EXPOSE_FILES.to_string(), "1".to_string());
        options.insert(OPTION_EXCLUDE_COLLECTIONS.to_string(), "5, 6".to_string());
        options.insert(OPTION_GEOLOCATION.to_string(), "0".to_string());

        let config = ExportConfig::from_options(&options);
        assert!(config.expose_files);
        assert_eq!(config.suppressed_collections, vec!["5", "6"]);
        assert!(config.publisher_exclusions.is_empty());
        assert!(!config.geolocation);
    }

    #[test]
    fn test_from_empty_options() {
        let options: HashMap<String, String> = HashMap::new();
        assert_eq!(ExportConfig::from_options(&options), ExportConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ExportConfig::from_json_str(r#"{ "expose_files": true }"#).unwrap();
        assert!(config.expose_files);
        assert!(config.suppressed_collections.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ExportConfig::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, QdcError::InvalidConfig(_)));
    }

    #[test]
    fn test_flags() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("no"));
    }
}
