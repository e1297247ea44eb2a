#![warn(missing_docs)]

//! # qdc-extended: Qualified Dublin Core for OAI-PMH
//!
//! Converts repository items into qualified Dublin Core (`qdc`) XML
//! fragments for exposure through an OAI-PMH repository, with the local
//! extensions Finnish libraries harvest into Finna: YKL classification,
//! Porstua and Kirjastovirma vocabularies, EDTF dates, URN permanent
//! addresses and file links.
//!
//! ## Quick Start
//!
//! ```
//! use qdc_extended::{item_to_qdc_xml, ConversionContext, ExportConfig, FieldCatalog, Item, ItemFile};
//!
//! let item = Item::builder(12, "https://example.org/items/show/12")
//!     .dc("Title", "Turun kartta")
//!     .dc("Subject", "42.1")
//!     .dc("Language", "suomi")
//!     .dc("Identifier", "URN:NBN:fi-fe2015001")
//!     .item_type("Still Image")
//!     .file(ItemFile::new("https://example.org/files/original/kartta.jpg"))
//!     .build();
//!
//! let config = ExportConfig::new().with_file_exposure(true);
//! let catalog = FieldCatalog::new();
//! let xml = item_to_qdc_xml(&item, &ConversionContext::new(&config, &catalog))?;
//!
//! assert!(xml.contains(r#"<dc:subject scheme="YKL">42.1</dc:subject>"#));
//! assert!(xml.contains("<dc:language>fin</dc:language>"));
//! assert!(xml.contains("<dc:type>StillImage</dc:type>"));
//! # Ok::<(), qdc_extended::QdcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`converter`] - Document assembly and access policy
//! - [`fields`] - Per-field transformation rules
//! - [`extensions`] - Local item-type fields
//! - [`classify`] - Classification-code heuristic
//! - [`vocabulary`] - Language, type and format tables
//! - [`namespaces`] - Namespace URIs and classifier
//! - [`terms`] - Canonical field descriptors
//! - [`document`] - Output element tree and XML writing
//! - [`dublin_core`] - Unrefined fifteen-element view
//! - [`formats`] - Metadata formats for the harvesting layer
//! - [`item`] - Item records and host interfaces
//! - [`config`] - Run configuration
//! - [`parallel`] - Batch conversion with Rayon
//! - [`error`] - Error types and result type

pub mod classify;
pub mod config;
pub mod converter;
pub mod document;
pub mod dublin_core;
pub mod error;
pub mod extensions;
pub mod fields;
/// Metadata formats with a common trait.
///
/// See the [`formats`] module documentation for the prefixes offered.
pub mod formats;
pub mod item;
pub mod namespaces;
pub mod parallel;
pub mod terms;
pub mod vocabulary;

pub use config::{ExportConfig, OptionStore};
pub use converter::{item_to_qdc, item_to_qdc_xml, ConversionContext};
pub use document::{QdcDocument, QdcElement};
pub use error::{QdcError, Result};
pub use item::{Coordinates, FieldCatalog, GeolocationSource, Item, ItemFile, ItemRecord};
