//! Common test helpers and utilities shared across test suite.

use qdc_extended::extensions::EXTENSION_FIELDS;
use qdc_extended::{ExportConfig, FieldCatalog, Item, ItemFile};

/// Display URL used by [`create_test_item`].
#[allow(dead_code)]
pub const DISPLAY_URL: &str = "https://museo.example.fi/items/show/101";

/// Creates a bare item with a display URL and nothing else.
pub fn create_test_item() -> Item {
    Item::new(101, DISPLAY_URL)
}

/// Creates a realistic photograph record from a local history collection.
///
/// Includes refined and unrefined Dublin Core values, local item-type
/// fields, a URN and two files, one with a thumbnail.
#[allow(dead_code)]
pub fn create_realistic_item() -> Item {
    Item::builder(101, DISPLAY_URL)
        .dc("Title", "Aurajoen ranta talvella")
        .dc("Creator", "Pietinen, Aarne")
        .dc("Subject", "Talvi")
        .dc("Subject", "77.4")
        .dc("Subject", "1938")
        .dc("Abstract", "Valokuva Aurajoen rannasta.")
        .dc("Description", "Taustalla tuomiokirkko.")
        .dc("Publisher", "Turun museokeskus")
        .dc("Date Created", "1938")
        .dc("Language", "fi")
        .dc("Format", "kuva/jpeg")
        .dc("Identifier", "URN:NBN:fi-fe2016041")
        .dc("Identifier", "TMK-1234")
        .dc("Relation", "https://example.org/series/4")
        .dc("Rights", "CC BY 4.0")
        .item_type_field("Paikka", "Turku")
        .item_type_field("Aikamääre", "1938-01~")
        .item_type("Still Image")
        .collection("4")
        .file(
            ItemFile::new("https://museo.example.fi/files/original/aura.jpg")
                .with_thumbnail("https://museo.example.fi/files/thumbnails/aura.jpg"),
        )
        .file(ItemFile::new("https://museo.example.fi/files/original/aura.tif"))
        .build()
}

/// A catalog defining every extension field.
#[allow(dead_code)]
pub fn full_catalog() -> FieldCatalog {
    EXTENSION_FIELDS.iter().map(|ext| ext.field).collect()
}

/// Configuration with file exposure on and nothing suppressed.
#[allow(dead_code)]
pub fn exposing_config() -> ExportConfig {
    ExportConfig::new().with_file_exposure(true)
}
