//! Parallel conversion of item batches using Rayon.
//!
//! Conversion holds no shared mutable state, so a batch of items can be
//! converted on Rayon's work-stealing pool with one [`ConversionContext`]
//! shared by all tasks. Results come back in input order.
//!
//! # Examples
//!
//! ```
//! use qdc_extended::parallel::convert_batch_xml;
//! use qdc_extended::{ConversionContext, ExportConfig, FieldCatalog, Item};
//!
//! let items: Vec<Item> = (1..=3)
//!     .map(|id| Item::builder(id, format!("https://example.org/items/show/{id}")).build())
//!     .collect();
//! let config = ExportConfig::default();
//! let catalog = FieldCatalog::new();
//! let fragments = convert_batch_xml(&items, &ConversionContext::new(&config, &catalog))?;
//! assert_eq!(fragments.len(), 3);
//! # Ok::<(), qdc_extended::QdcError>(())
//! ```

use rayon::prelude::*;

use crate::converter::{item_to_qdc, ConversionContext};
use crate::document::QdcDocument;
use crate::error::Result;
use crate::item::ItemRecord;

/// Convert a batch of items in parallel.
#[must_use]
pub fn convert_batch<R>(items: &[R], ctx: &ConversionContext<'_>) -> Vec<QdcDocument>
where
    R: ItemRecord + Sync,
{
    items.par_iter().map(|item| item_to_qdc(item, ctx)).collect()
}

/// Convert a batch of items in parallel and serialize each document.
///
/// # Errors
///
/// Returns the first serialization error encountered.
pub fn convert_batch_xml<R>(items: &[R], ctx: &ConversionContext<'_>) -> Result<Vec<String>>
where
    R: ItemRecord + Sync,
{
    items
        .par_iter()
        .map(|item| item_to_qdc(item, ctx).to_xml_string())
        .collect()
}
