//! Canonical field descriptors.
//!
//! The ordered list of DCMI terms the converter knows how to emit, shipped
//! as `data/elements.json` and parsed once on first use. Each entry carries
//! the output element name, the label the host stores values under, and for
//! refinements the base element it narrows.

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::namespaces::{is_base_element, namespace_for, Namespace, DC_ELEMENT_NAMES};

/// A DCMI term the converter can emit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// Output element name (e.g. `created`).
    pub name: String,
    /// Host element label (e.g. `Date Created`).
    pub label: String,
    /// Base element this term refines, if any.
    #[serde(default)]
    pub refines: Option<String>,
}

impl FieldDescriptor {
    /// Namespace the element is emitted in.
    #[must_use]
    pub fn namespace(&self) -> Namespace {
        namespace_for(&self.name)
    }
}

const ELEMENTS_JSON: &str = include_str!("../data/elements.json");

lazy_static! {
    static ref FIELD_DESCRIPTORS: Vec<FieldDescriptor> =
        serde_json::from_str(ELEMENTS_JSON).expect("bundled elements.json is valid");
}

/// All canonical field descriptors, in emission order.
#[must_use]
pub fn field_descriptors() -> &'static [FieldDescriptor] {
    FIELD_DESCRIPTORS.as_slice()
}

/// Look up a descriptor by element name.
#[must_use]
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELD_DESCRIPTORS.iter().find(|d| d.name == name)
}

/// Host label for an element name, if the name is canonical.
#[must_use]
pub fn label_of(name: &str) -> Option<&'static str> {
    descriptor(name).map(|d| d.label.as_str())
}

/// The base Dublin Core element an element folds into.
///
/// Base elements map to themselves, refinements of a base element map to
/// that element, and everything else has no base.
#[must_use]
pub fn base_element(name: &str) -> Option<&'static str> {
    if let Some(base) = DC_ELEMENT_NAMES.iter().copied().find(|base| *base == name) {
        return Some(base);
    }
    descriptor(name)
        .and_then(|d| d.refines.as_deref())
        .filter(|base| is_base_element(base))
}
