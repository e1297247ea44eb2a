//! Document assembly.
//!
//! [`item_to_qdc`] runs the conversion steps in a fixed order so output is
//! reproducible:
//!
//! 1. canonical fields, through [`emit_field`]
//! 2. abstract/description merge
//! 3. item-type extension fields
//! 4. `dc:type`, falling back to the item type name
//! 5. geolocation coverage
//! 6. permanent addresses and file links, subject to collection suppression

use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::document::{QdcDocument, QdcElement};
use crate::error::Result;
use crate::extensions::emit_extension_fields;
use crate::fields::{emit_abstract, emit_field, is_urn, non_empty_values, IDENTIFIER_LABEL};
use crate::item::{FieldCatalog, GeolocationSource, ItemRecord, Rendition, DUBLIN_CORE};
use crate::namespaces::Namespace;
use crate::terms::field_descriptors;
use crate::vocabulary::item_type_of;

/// Host label of the type element.
pub const TYPE_LABEL: &str = "Type";

/// URN resolver prefix for `kk:permaddress`.
pub const URN_RESOLVER: &str = "http://www.urn.fi/";

/// Everything a conversion needs besides the item.
///
/// Built once per export run and shared by reference; it holds no mutable
/// state, so one context can serve many threads.
#[derive(Clone, Copy)]
pub struct ConversionContext<'a> {
    /// Run configuration
    pub config: &'a ExportConfig,
    /// Field names defined by the host schema
    pub catalog: &'a FieldCatalog,
    /// Coordinate lookup, when the host provides one
    pub geolocation: Option<&'a dyn GeolocationSource>,
}

impl std::fmt::Debug for ConversionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionContext")
            .field("config", self.config)
            .field("catalog", self.catalog)
            .field("geolocation", &self.geolocation.is_some())
            .finish()
    }
}

impl<'a> ConversionContext<'a> {
    /// A context without geolocation.
    #[must_use]
    pub const fn new(config: &'a ExportConfig, catalog: &'a FieldCatalog) -> Self {
        ConversionContext {
            config,
            catalog,
            geolocation: None,
        }
    }

    /// Attach a coordinate source.
    #[must_use]
    pub fn with_geolocation(mut self, source: &'a dyn GeolocationSource) -> Self {
        self.geolocation = Some(source);
        self
    }
}

/// Convert an item to a qualified Dublin Core document.
///
/// # Examples
///
/// ```
/// use qdc_extended::{item_to_qdc, ConversionContext, ExportConfig, FieldCatalog, Item};
/// use qdc_extended::namespaces::Namespace;
///
/// let item = Item::builder(1, "https://example.org/items/show/1")
///     .dc("Title", "Kartta")
///     .item_type("document")
///     .build();
///
/// let config = ExportConfig::default();
/// let catalog = FieldCatalog::new();
/// let doc = item_to_qdc(&item, &ConversionContext::new(&config, &catalog));
///
/// assert_eq!(doc.values(Namespace::Dc, "title"), vec!["Kartta"]);
/// assert_eq!(doc.values(Namespace::Dc, "type"), vec!["Text"]);
/// ```
#[must_use]
pub fn item_to_qdc<R: ItemRecord + ?Sized>(item: &R, ctx: &ConversionContext<'_>) -> QdcDocument {
    let mut doc = QdcDocument::new();

    for field in field_descriptors() {
        emit_field(item, field, ctx.config, &mut doc);
    }
    emit_abstract(item, &mut doc);
    emit_extension_fields(item, ctx.catalog, &mut doc);
    emit_types(item, &mut doc);
    if ctx.config.geolocation {
        if let Some(source) = ctx.geolocation {
            emit_geolocation(item, source, &mut doc);
        }
    }
    emit_access_links(item, ctx.config, &mut doc);

    doc
}

/// Convert an item directly to an XML fragment.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn item_to_qdc_xml<R: ItemRecord + ?Sized>(
    item: &R,
    ctx: &ConversionContext<'_>,
) -> Result<String> {
    item_to_qdc(item, ctx).to_xml_string()
}

/// Emit `dc:type` from the declared Type values, or from the item type name
/// when none are declared. Always emits at least one element.
fn emit_types<R: ItemRecord + ?Sized>(item: &R, doc: &mut QdcDocument) {
    let declared = non_empty_values(item, DUBLIN_CORE, TYPE_LABEL);
    if declared.is_empty() {
        let name = item.item_type().unwrap_or_default().to_lowercase();
        doc.append(Namespace::Dc, "type", item_type_of(&name));
    } else {
        for value in declared {
            doc.append(Namespace::Dc, "type", item_type_of(&value.to_lowercase()));
        }
    }
}

fn emit_geolocation<R: ItemRecord + ?Sized>(
    item: &R,
    source: &dyn GeolocationSource,
    doc: &mut QdcDocument,
) {
    match source.coordinates_for(item.id()) {
        Ok(Some(point)) => doc.push(
            QdcElement::new(
                Namespace::Dcterms,
                "coverage",
                format!("{},{}", point.lat, point.lon),
            )
            .with_attribute("type", "geocoding")
            .with_attribute("datum", "WGS84")
            .with_attribute("srid", "4326")
            .with_attribute("format", "lat,lon"),
        ),
        Ok(None) => {},
        Err(err) => warn!(item = item.id(), error = %err, "geolocation unavailable"),
    }
}

/// Permanent addresses and file links.
///
/// Items of a suppressed collection expose neither; if they have files they
/// get a `dc:relation` to the display page instead.
fn emit_access_links<R: ItemRecord + ?Sized>(
    item: &R,
    config: &ExportConfig,
    doc: &mut QdcDocument,
) {
    if config.is_suppressed(item.collection_id()) {
        debug!(item = item.id(), collection = ?item.collection_id(), "file links suppressed");
        if item.has_files() {
            doc.append(Namespace::Dc, "relation", item.display_url());
        }
        return;
    }

    for urn in non_empty_values(item, DUBLIN_CORE, IDENTIFIER_LABEL)
        .into_iter()
        .filter(|value| is_urn(value))
    {
        doc.push(
            QdcElement::new(Namespace::Kk, "permaddress", format!("{URN_RESOLVER}{urn}"))
                .with_attribute("type", "urn"),
        );
    }

    if !config.expose_files {
        return;
    }
    for file in item.files() {
        if let Some(url) = file.rendition_url(Rendition::Original) {
            doc.push(QdcElement::new(Namespace::Kk, "file", url).with_attribute("bundle", "ORIGINAL"));
        }
        if let Some(url) = file.rendition_url(Rendition::Thumbnail) {
            doc.push(QdcElement::new(Namespace::Kk, "file", url).with_attribute("bundle", "THUMBNAIL"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QdcError;
    use crate::item::{Coordinates, Item, ItemFile};
    use std::collections::HashMap;

    fn convert(item: &Item, config: &ExportConfig) -> QdcDocument {
        let catalog = FieldCatalog::new();
        item_to_qdc(item, &ConversionContext::new(config, &catalog))
    }

    struct FailingSource;

    impl GeolocationSource for FailingSource {
        fn coordinates_for(&self, _item_id: u64) -> Result<Option<Coordinates>> {
            Err(QdcError::Collaborator("locations table missing".to_string()))
        }
    }

    #[test]
    fn test_type_fallback_to_item_type() {
        let item = Item::builder(1, "u").item_type("Document").build();
        let doc = convert(&item, &ExportConfig::default());
        assert_eq!(doc.values(Namespace::Dc, "type"), vec!["Text"]);
    }

    #[test]
    fn test_type_without_item_type() {
        let item = Item::builder(1, "u").build();
        let doc = convert(&item, &ExportConfig::default());
        assert_eq!(doc.values(Namespace::Dc, "type"), vec!["Text"]);
    }

    #[test]
    fn test_declared_types_override_item_type() {
        let item = Item::builder(1, "u")
            .dc("Type", "Kuva")
            .dc("Type", "ääni")
            .item_type("Document")
            .build();
        let doc = convert(&item, &ExportConfig::default());
        assert_eq!(doc.values(Namespace::Dc, "type"), vec!["Image", "Sound"]);
    }

    #[test]
    fn test_geolocation_emitted() {
        let mut source = HashMap::new();
        source.insert(5_u64, Coordinates::new(60.4518, 22.2666));
        let item = Item::builder(5, "u").build();
        let config = ExportConfig::new().with_geolocation(true);
        let catalog = FieldCatalog::new();
        let ctx = ConversionContext::new(&config, &catalog).with_geolocation(&source);
        let doc = item_to_qdc(&item, &ctx);

        let coverage: Vec<_> = doc.find(Namespace::Dcterms, "coverage").collect();
        assert_eq!(coverage.len(), 1);
        assert_eq!(coverage[0].value, "60.4518,22.2666");
        assert_eq!(
            coverage[0].attributes,
            vec![
                ("type", "geocoding".to_string()),
                ("datum", "WGS84".to_string()),
                ("srid", "4326".to_string()),
                ("format", "lat,lon".to_string()),
            ]
        );
    }

    #[test]
    fn test_geolocation_missing_for_item() {
        let source: HashMap<u64, Coordinates> = HashMap::new();
        let item = Item::builder(5, "u").build();
        let config = ExportConfig::new().with_geolocation(true);
        let catalog = FieldCatalog::new();
        let ctx = ConversionContext::new(&config, &catalog).with_geolocation(&source);
        let doc = item_to_qdc(&item, &ctx);

        assert_eq!(doc.find(Namespace::Dcterms, "coverage").count(), 0);
    }

    #[test]
    fn test_geolocation_disabled_in_config() {
        let mut source = HashMap::new();
        source.insert(5_u64, Coordinates::new(60.0, 24.0));
        let item = Item::builder(5, "u").build();
        let config = ExportConfig::default();
        let catalog = FieldCatalog::new();
        let ctx = ConversionContext::new(&config, &catalog).with_geolocation(&source);
        assert_eq!(item_to_qdc(&item, &ctx).find(Namespace::Dcterms, "coverage").count(), 0);
    }

    #[test]
    fn test_geolocation_failure_is_skipped() {
        let item = Item::builder(5, "u").build();
        let config = ExportConfig::new().with_geolocation(true);
        let catalog = FieldCatalog::new();
        let ctx = ConversionContext::new(&config, &catalog).with_geolocation(&FailingSource);
        let doc = item_to_qdc(&item, &ctx);
        assert_eq!(doc.find(Namespace::Dcterms, "coverage").count(), 0);
        assert_eq!(doc.values(Namespace::Dc, "type"), vec!["Text"]);
    }

    #[test]
    fn test_file_links_with_thumbnails() {
        let item = Item::builder(1, "u")
            .file(ItemFile::new("https://example.org/a.pdf"))
            .file(ItemFile::new("https://example.org/b.jpg").with_thumbnail("https://example.org/b_t.jpg"))
            .build();
        let doc = convert(&item, &ExportConfig::new().with_file_exposure(true));
        let bundles: Vec<_> = doc
            .find(Namespace::Kk, "file")
            .map(|e| (e.value.as_str(), e.attribute("bundle").unwrap()))
            .collect();
        assert_eq!(
            bundles,
            vec![
                ("https://example.org/a.pdf", "ORIGINAL"),
                ("https://example.org/b.jpg", "ORIGINAL"),
                ("https://example.org/b_t.jpg", "THUMBNAIL"),
            ]
        );
    }

    #[test]
    fn test_file_exposure_disabled() {
        let item = Item::builder(1, "u").file(ItemFile::new("f")).build();
        let doc = convert(&item, &ExportConfig::default());
        assert_eq!(doc.find(Namespace::Kk, "file").count(), 0);
    }

    #[test]
    fn test_permaddress() {
        let item = Item::builder(1, "u")
            .dc("Identifier", "URN:NBN:fi-fe201501")
            .dc("Identifier", "ISBN 951-0")
            .build();
        let doc = convert(&item, &ExportConfig::default());
        let addresses: Vec<_> = doc.find(Namespace::Kk, "permaddress").collect();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].value, "http://www.urn.fi/URN:NBN:fi-fe201501");
        assert_eq!(addresses[0].attribute("type"), Some("urn"));
    }

    #[test]
    fn test_suppressed_collection_with_files() {
        let item = Item::builder(1, "https://example.org/items/show/1")
            .collection("9")
            .dc("Identifier", "URN:NBN:fi-x")
            .file(ItemFile::new("f").with_thumbnail("t"))
            .build();
        let config = ExportConfig::new()
            .with_file_exposure(true)
            .with_suppressed_collections("9");
        let doc = convert(&item, &config);
        assert_eq!(doc.find(Namespace::Kk, "file").count(), 0);
        assert_eq!(doc.find(Namespace::Kk, "permaddress").count(), 0);
        assert_eq!(
            doc.values(Namespace::Dc, "relation"),
            vec!["https://example.org/items/show/1"]
        );
        assert!(doc
            .find(Namespace::Dc, "identifier")
            .all(|e| e.attribute("type") != Some("cooluri")));
    }

    #[test]
    fn test_suppressed_collection_without_files() {
        let item = Item::builder(1, "https://example.org/items/show/1")
            .collection("9")
            .build();
        let doc = convert(&item, &ExportConfig::new().with_suppressed_collections("9"));
        assert_eq!(doc.find(Namespace::Dc, "relation").count(), 0);
        assert_eq!(doc.find(Namespace::Dc, "identifier").count(), 1);
    }

    #[test]
    fn test_step_order() {
        let item = Item::builder(1, "u")
            .dc("Title", "T")
            .dc("Abstract", "A")
            .item_type("kuva")
            .build();
        let doc = convert(&item, &ExportConfig::default());
        let names: Vec<_> = doc.elements().iter().map(|e| e.qualified_name()).collect();
        assert_eq!(names, vec!["dc:title", "dc:identifier", "dcterms:abstract", "dc:type"]);
    }
}
