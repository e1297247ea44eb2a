//! Metadata format trait for harvesting-protocol integration.
//!
//! A harvesting layer announces each format by prefix, namespace and schema,
//! and asks it to write one item's metadata into the response it is
//! building. The trait is object-safe so formats can be listed as
//! `Box<dyn MetadataFormat>`.

use std::io::Write;

use quick_xml::Writer;

use crate::converter::{item_to_qdc, ConversionContext};
use crate::dublin_core::{dublin_core_to_xml, qdc_to_dublin_core};
use crate::error::{QdcError, Result};
use crate::item::ItemRecord;
use crate::namespaces::{OAI_DC, OAI_DC_SCHEMA, QDC, QDC_SCHEMA};

/// Metadata prefix of the qualified format.
pub const QDC_PREFIX: &str = "qdc_finna";

/// Metadata prefix of the unrefined format.
pub const OAI_DC_PREFIX: &str = "oai_dc";

/// A metadata format the harvesting layer can offer.
pub trait MetadataFormat: std::fmt::Debug + Send + Sync {
    /// Metadata prefix announced to harvesters.
    fn prefix(&self) -> &'static str;

    /// Namespace of the format's container element.
    fn namespace(&self) -> &'static str;

    /// Schema location of the format.
    fn schema(&self) -> &'static str;

    /// Write the item's metadata fragment to `out`.
    ///
    /// Callers embedding the fragment in their own XML writer can pass the
    /// writer's inner sink (`writer.get_mut()`).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the output fails.
    fn write_metadata(
        &self,
        item: &dyn ItemRecord,
        ctx: &ConversionContext<'_>,
        out: &mut dyn Write,
    ) -> Result<()>;

    /// Render the item's metadata fragment as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_xml_string(&self, item: &dyn ItemRecord, ctx: &ConversionContext<'_>) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_metadata(item, ctx, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| QdcError::XmlWrite(e.to_string()))
    }
}

/// Qualified Dublin Core with Finnish library extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedDc;

impl MetadataFormat for QualifiedDc {
    fn prefix(&self) -> &'static str {
        QDC_PREFIX
    }

    fn namespace(&self) -> &'static str {
        QDC
    }

    fn schema(&self) -> &'static str {
        QDC_SCHEMA
    }

    fn write_metadata(
        &self,
        item: &dyn ItemRecord,
        ctx: &ConversionContext<'_>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut writer = Writer::new(out);
        item_to_qdc(item, ctx).write_to(&mut writer)
    }
}

/// The qualified document folded into the fifteen base elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrefinedDc;

impl MetadataFormat for UnrefinedDc {
    fn prefix(&self) -> &'static str {
        OAI_DC_PREFIX
    }

    fn namespace(&self) -> &'static str {
        OAI_DC
    }

    fn schema(&self) -> &'static str {
        OAI_DC_SCHEMA
    }

    fn write_metadata(
        &self,
        item: &dyn ItemRecord,
        ctx: &ConversionContext<'_>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let dc = qdc_to_dublin_core(&item_to_qdc(item, ctx));
        out.write_all(dublin_core_to_xml(&dc).as_bytes())?;
        Ok(())
    }
}
