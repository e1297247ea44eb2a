//! Metadata formats offered to the harvesting layer.
//!
//! | Prefix      | Type            | Description                                   |
//! |-------------|-----------------|-----------------------------------------------|
//! | `qdc_finna` | [`QualifiedDc`] | Qualified Dublin Core with local extensions   |
//! | `oai_dc`    | [`UnrefinedDc`] | Refinements folded into the 15 base elements  |
//!
//! # Usage
//!
//! ```
//! use qdc_extended::formats::{available_formats, MetadataFormat};
//! use qdc_extended::{ConversionContext, ExportConfig, FieldCatalog, Item};
//!
//! let config = ExportConfig::new().with_unrefined_dc(true);
//! let catalog = FieldCatalog::new();
//! let ctx = ConversionContext::new(&config, &catalog);
//! let item = Item::builder(1, "https://example.org/items/show/1").build();
//!
//! for format in available_formats(&config) {
//!     let xml = format.to_xml_string(&item, &ctx)?;
//!     println!("{}: {xml}", format.prefix());
//! }
//! # Ok::<(), qdc_extended::QdcError>(())
//! ```

mod traits;

pub use traits::{MetadataFormat, QualifiedDc, UnrefinedDc, OAI_DC_PREFIX, QDC_PREFIX};

use crate::config::ExportConfig;

/// Formats enabled by the run configuration, qualified first.
#[must_use]
pub fn available_formats(config: &ExportConfig) -> Vec<Box<dyn MetadataFormat>> {
    let mut formats: Vec<Box<dyn MetadataFormat>> = vec![Box::new(QualifiedDc)];
    if config.unrefined_dc {
        formats.push(Box::new(UnrefinedDc));
    }
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrefined_is_opt_in() {
        assert_eq!(available_formats(&ExportConfig::default()).len(), 1);
        let config = ExportConfig::new().with_unrefined_dc(true);
        let prefixes: Vec<_> = available_formats(&config).iter().map(|f| f.prefix()).collect();
        assert_eq!(prefixes, vec![QDC_PREFIX, OAI_DC_PREFIX]);
    }
}
