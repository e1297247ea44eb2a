//! Item records and the host collaborator interfaces.
//!
//! The converter reads repository items through the [`ItemRecord`] trait so
//! that it never touches the host's storage directly. This module also
//! provides:
//! - [`Item`] - an in-memory record for hosts that materialize items
//! - [`ItemFile`] - an attached file and its renditions
//! - [`FieldCatalog`] - the field names the host schema defines
//! - [`GeolocationSource`] - optional coordinate lookup
//!
//! # Examples
//!
//! ```
//! use qdc_extended::item::{Item, ItemFile, ItemRecord, DUBLIN_CORE};
//!
//! let item = Item::builder(42, "https://example.org/items/show/42")
//!     .dc("Title", "Helsingin kartta")
//!     .dc("Subject", "616.2")
//!     .item_type("Still Image")
//!     .file(ItemFile::new("https://example.org/files/original/a.jpg"))
//!     .build();
//!
//! assert_eq!(item.values_of(DUBLIN_CORE, "Title"), vec!["Helsingin kartta"]);
//! assert_eq!(item.files().len(), 1);
//! ```

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vocabulary::normalize_key;

/// Element set holding the Dublin Core elements.
pub const DUBLIN_CORE: &str = "Dublin Core";

/// Element set holding item-type specific fields.
pub const ITEM_TYPE_METADATA: &str = "Item Type Metadata";

/// Rendition of an attached file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendition {
    /// The uploaded original.
    Original,
    /// A derived thumbnail image.
    Thumbnail,
}

/// A file attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFile {
    /// Public URL of the original file
    pub original_url: String,
    /// Public URL of the derived thumbnail, when one exists
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl ItemFile {
    /// Create a file with only an original rendition.
    pub fn new(original_url: impl Into<String>) -> Self {
        ItemFile {
            original_url: original_url.into(),
            thumbnail_url: None,
        }
    }

    /// Attach a thumbnail rendition.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    /// URL of the requested rendition, if the file has it.
    #[must_use]
    pub fn rendition_url(&self, kind: Rendition) -> Option<&str> {
        match kind {
            Rendition::Original => Some(self.original_url.as_str()),
            Rendition::Thumbnail => self.thumbnail_url.as_deref(),
        }
    }

    /// Whether a thumbnail has been derived for this file.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_url.is_some()
    }
}

/// Read access to a repository item.
///
/// Implementations are owned by the host; the converter only reads them.
pub trait ItemRecord {
    /// Host identifier of the item, used for coordinate lookup.
    fn id(&self) -> u64;

    /// All text values stored under `(element_set, label)`, in entry order.
    fn values_of(&self, element_set: &str, label: &str) -> Vec<&str>;

    /// Name of the item's item type, if it has one.
    fn item_type(&self) -> Option<&str>;

    /// Identifier of the collection the item belongs to.
    fn collection_id(&self) -> Option<&str>;

    /// Attached files, in display order.
    fn files(&self) -> &[ItemFile];

    /// Canonical public URL of the item's display page.
    fn display_url(&self) -> String;

    /// Whether any files are attached.
    fn has_files(&self) -> bool {
        !self.files().is_empty()
    }
}

/// An in-memory item record.
///
/// Element texts are stored per element set and label using `IndexMap`, so
/// values come back in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    /// Host identifier
    pub id: u64,
    /// Element set -> label -> values
    #[serde(default)]
    pub element_texts: IndexMap<String, IndexMap<String, Vec<String>>>,
    /// Item type name
    #[serde(default)]
    pub item_type: Option<String>,
    /// Collection identifier
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Attached files
    #[serde(default)]
    pub files: Vec<ItemFile>,
    /// Canonical display URL
    pub display_url: String,
}

impl Item {
    /// Create an empty item.
    pub fn new(id: u64, display_url: impl Into<String>) -> Self {
        Item {
            id,
            display_url: display_url.into(),
            ..Item::default()
        }
    }

    /// Create a builder for fluently constructing items.
    pub fn builder(id: u64, display_url: impl Into<String>) -> ItemBuilder {
        ItemBuilder {
            item: Item::new(id, display_url),
        }
    }

    /// Parse an item from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an item.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a value under `(element_set, label)`.
    pub fn add_text(&mut self, element_set: &str, label: &str, value: impl Into<String>) {
        self.element_texts
            .entry(element_set.to_string())
            .or_default()
            .entry(label.to_string())
            .or_default()
            .push(value.into());
    }

    /// Append a Dublin Core value.
    pub fn add_dc(&mut self, label: &str, value: impl Into<String>) {
        self.add_text(DUBLIN_CORE, label, value);
    }

    /// Attach a file.
    pub fn add_file(&mut self, file: ItemFile) {
        self.files.push(file);
    }
}

impl ItemRecord for Item {
    fn id(&self) -> u64 {
        self.id
    }

    fn values_of(&self, element_set: &str, label: &str) -> Vec<&str> {
        self.element_texts
            .get(element_set)
            .and_then(|labels| labels.get(label))
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref()
    }

    fn files(&self) -> &[ItemFile] {
        &self.files
    }

    fn display_url(&self) -> String {
        self.display_url.clone()
    }
}

/// Builder for [`Item`].
#[derive(Debug)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    /// Add a value under an arbitrary element set.
    #[must_use]
    pub fn text(mut self, element_set: &str, label: &str, value: &str) -> Self {
        self.item.add_text(element_set, label, value);
        self
    }

    /// Add a Dublin Core value.
    #[must_use]
    pub fn dc(self, label: &str, value: &str) -> Self {
        self.text(DUBLIN_CORE, label, value)
    }

    /// Add an item-type metadata value.
    #[must_use]
    pub fn item_type_field(self, label: &str, value: &str) -> Self {
        self.text(ITEM_TYPE_METADATA, label, value)
    }

    /// Set the item type name.
    #[must_use]
    pub fn item_type(mut self, name: &str) -> Self {
        self.item.item_type = Some(name.to_string());
        self
    }

    /// Set the collection identifier.
    #[must_use]
    pub fn collection(mut self, id: &str) -> Self {
        self.item.collection_id = Some(id.to_string());
        self
    }

    /// Attach a file.
    #[must_use]
    pub fn file(mut self, file: ItemFile) -> Self {
        self.item.add_file(file);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Item {
        self.item
    }
}

/// The field names the host schema defines.
///
/// Extension fields are emitted only when their name is in the catalog.
/// Names are compared after [`normalize_key`].
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    names: HashSet<String>,
}

impl FieldCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the catalog defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_key(name))
    }

    /// Add a field name.
    pub fn insert(&mut self, name: &str) {
        self.names.insert(normalize_key(name));
    }

    /// Number of names in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FieldCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut catalog = FieldCatalog::new();
        for name in iter {
            catalog.insert(name.as_ref());
        }
        catalog
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }
}

/// Coordinate lookup provided by the host's geolocation capability.
pub trait GeolocationSource: Send + Sync {
    /// Coordinates recorded for an item, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn coordinates_for(&self, item_id: u64) -> Result<Option<Coordinates>>;
}

impl GeolocationSource for HashMap<u64, Coordinates> {
    fn coordinates_for(&self, item_id: u64) -> Result<Option<Coordinates>> {
        Ok(self.get(&item_id).copied())
    }
}
