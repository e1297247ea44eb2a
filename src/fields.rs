//! Per-field transformation rules.
//!
//! [`emit_field`] takes one canonical descriptor, fetches the item's Dublin
//! Core values for it, and applies the field's rule. Most fields are copied
//! verbatim under their classified namespace; the exceptions are:
//!
//! | Field        | Rule                                                       |
//! |--------------|------------------------------------------------------------|
//! | `identifier` | only `URN…` values, as `dc:identifier type="uri"`          |
//! | `subject`    | numeric codes get `scheme="YKL"`                           |
//! | `language`   | translated to ISO 639-2                                    |
//! | `format`     | translated to an IANA media type                           |
//! | `created`    | also repeated as an unrefined `dc:date`                    |
//! | `publisher`  | excluded names become `dcterms:mediator`                   |
//! | `type`       | emitted later by the item-type step                        |
//! | `relation`, `abstract`, `description` | not emitted here                  |

use tracing::debug;

use crate::classify::{is_classification_code, YKL_SCHEME};
use crate::config::ExportConfig;
use crate::document::{QdcDocument, QdcElement};
use crate::item::{ItemRecord, DUBLIN_CORE};
use crate::namespaces::Namespace;
use crate::terms::FieldDescriptor;
use crate::vocabulary::{format_of, language_of};

/// Prefix marking a value as a URN.
pub const URN_PREFIX: &str = "URN";

/// Host label of the identifier element.
pub const IDENTIFIER_LABEL: &str = "Identifier";
/// Host label of the abstract refinement.
pub const ABSTRACT_LABEL: &str = "Abstract";
/// Host label of the description element.
pub const DESCRIPTION_LABEL: &str = "Description";

/// Trimmed, non-empty values stored under `(element_set, label)`.
///
/// `"0"` is a value like any other and is kept.
pub fn non_empty_values<'a, R: ItemRecord + ?Sized>(
    item: &'a R,
    element_set: &str,
    label: &str,
) -> Vec<&'a str> {
    item.values_of(element_set, label)
        .into_iter()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Returns true if an identifier value is a URN.
#[must_use]
pub fn is_urn(value: &str) -> bool {
    value.starts_with(URN_PREFIX)
}

/// Apply the transformation rule of `field` to every value the item holds
/// for it.
pub fn emit_field<R: ItemRecord + ?Sized>(
    item: &R,
    field: &FieldDescriptor,
    config: &ExportConfig,
    doc: &mut QdcDocument,
) {
    let namespace = field.namespace();
    for value in non_empty_values(item, DUBLIN_CORE, &field.label) {
        match field.name.as_str() {
            "identifier" => {
                if is_urn(value) {
                    doc.push(
                        QdcElement::new(Namespace::Dc, "identifier", value)
                            .with_attribute("type", "uri"),
                    );
                }
            },
            "subject" => emit_subject(doc, namespace, value),
            "language" => doc.append(namespace, "language", language_of(value)),
            "format" => doc.append(namespace, "format", format_of(value)),
            "created" => {
                doc.append(namespace, "created", value);
                doc.append(Namespace::Dc, "date", value);
            },
            "publisher" => {
                if config.is_excluded_publisher(value) {
                    debug!(publisher = value, "excluded publisher emitted as mediator");
                    doc.append(Namespace::Dcterms, "mediator", value);
                } else {
                    doc.append(namespace, "publisher", value);
                }
            },
            // type values are translated and emitted once by the item-type step
            "type" | "relation" | "abstract" | "description" => {},
            name => doc.append(namespace, name, value),
        }
    }

    if field.name == "identifier" && !item.has_files() {
        doc.push(
            QdcElement::new(Namespace::Dc, "identifier", item.display_url())
                .with_attribute("type", "cooluri"),
        );
    }
}

fn emit_subject(doc: &mut QdcDocument, namespace: Namespace, value: &str) {
    if is_classification_code(value) {
        doc.push(
            QdcElement::new(Namespace::Dc, "subject", value).with_attribute("scheme", YKL_SCHEME),
        );
    } else {
        doc.append(namespace, "subject", value);
    }
}

/// Merge all Abstract and Description values into one `dcterms:abstract`.
///
/// Abstract values come first; values are joined with single spaces.
/// Nothing is emitted when both fields are empty.
pub fn emit_abstract<R: ItemRecord + ?Sized>(item: &R, doc: &mut QdcDocument) {
    let mut parts = non_empty_values(item, DUBLIN_CORE, ABSTRACT_LABEL);
    parts.extend(non_empty_values(item, DUBLIN_CORE, DESCRIPTION_LABEL));
    if !parts.is_empty() {
        doc.append(Namespace::Dcterms, "abstract", parts.join(" "));
    }
}
