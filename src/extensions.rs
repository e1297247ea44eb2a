//! Item-type fields used by Finnish libraries.
//!
//! Some repositories define local item-type fields (YKL class, person
//! subject, EDTF date, Porstua and Kirjastovirma vocabularies, journal
//! title, place). Each is emitted only when the host's [`FieldCatalog`]
//! defines it.

use crate::classify::{is_classification_code, YKL_SCHEME};
use crate::document::{QdcDocument, QdcElement};
use crate::fields::non_empty_values;
use crate::item::{FieldCatalog, ItemRecord, ITEM_TYPE_METADATA};
use crate::namespaces::Namespace;

/// An item-type field and the element it is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionField {
    /// Field name in the host schema
    pub field: &'static str,
    /// Output namespace
    pub namespace: Namespace,
    /// Output element name
    pub element: &'static str,
    /// `scheme` attribute value, if any
    pub scheme: Option<&'static str>,
    /// Only emit values that pass the classification-code heuristic
    pub codes_only: bool,
}

const fn extension(
    field: &'static str,
    namespace: Namespace,
    element: &'static str,
    scheme: Option<&'static str>,
) -> ExtensionField {
    ExtensionField {
        field,
        namespace,
        element,
        scheme,
        codes_only: false,
    }
}

/// Extension fields in emission order.
pub const EXTENSION_FIELDS: &[ExtensionField] = &[
    ExtensionField {
        codes_only: true,
        ..extension("YKL", Namespace::Dc, "subject", Some(YKL_SCHEME))
    },
    extension("Henkilö", Namespace::Dc, "subject", None),
    extension("Aikamääre", Namespace::Dcterms, "created", Some("EDTF")),
    extension("Porstua-luokka", Namespace::Dc, "subject", Some("porstua")),
    extension("Porstua-alaluokka", Namespace::Dc, "subject", Some("porstua")),
    extension("Lehden nimi", Namespace::Dcterms, "bibliographicCitation", None),
    extension("Aineistoryhmä", Namespace::Dc, "subject", Some("kirjastovirma")),
    extension("Aihekokonaisuus", Namespace::Dc, "subject", Some("kirjastovirma")),
    extension("Paikka", Namespace::Dcterms, "coverage", None),
];

/// Emit every extension field the catalog defines.
pub fn emit_extension_fields<R: ItemRecord + ?Sized>(
    item: &R,
    catalog: &FieldCatalog,
    doc: &mut QdcDocument,
) {
    for ext in EXTENSION_FIELDS.iter().filter(|ext| catalog.contains(ext.field)) {
        for value in non_empty_values(item, ITEM_TYPE_METADATA, ext.field) {
            if ext.codes_only && !is_classification_code(value) {
                continue;
            }
            let mut element = QdcElement::new(ext.namespace, ext.element, value);
            if let Some(scheme) = ext.scheme {
                element = element.with_attribute("scheme", scheme);
            }
            doc.push(element);
        }
    }
}
