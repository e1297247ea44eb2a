//! Unrefined Dublin Core view of a qualified document.
//!
//! Simple harvesters only understand the fifteen base elements. When the
//! host enables the unrefined view, every refinement is folded into the base
//! element it narrows (`created` into `date`, `abstract` into
//! `description`, `permaddress` into `identifier`, ...) and the result is
//! written as an `oai_dc:dc` fragment.
//!
//! Elements with no base element (file links, `mediator`, accrual terms) are
//! dropped; `audience` is not a base element, so `mediator` has nowhere to go.
//! Values written directly to a base element are kept as they are, repeats
//! included. A refinement value is skipped when its base element already
//! holds the same value.

use std::fmt::Write;

use crate::document::{QdcDocument, QdcElement};
use crate::namespaces::{Namespace, DC, OAI_DC, OAI_DC_SCHEMA, XSI};
use crate::terms::base_element;

/// Dublin Core metadata record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DublinCoreRecord {
    /// dc:title - Title of the resource
    pub title: Vec<String>,
    /// dc:creator - Entity responsible for the resource
    pub creator: Vec<String>,
    /// dc:subject - Topic of the resource
    pub subject: Vec<String>,
    /// dc:description - Account of the resource
    pub description: Vec<String>,
    /// dc:publisher - Entity responsible for making the resource available
    pub publisher: Vec<String>,
    /// dc:contributor - Entity responsible for making contributions to the resource
    pub contributor: Vec<String>,
    /// dc:date - Point or period of time associated with the resource
    pub date: Vec<String>,
    /// dc:type - Nature or genre of the resource
    pub dc_type: Vec<String>,
    /// dc:format - File format, physical medium, or dimensions of the resource
    pub format: Vec<String>,
    /// dc:identifier - Unambiguous reference to the resource
    pub identifier: Vec<String>,
    /// dc:source - Related resource from which the resource is derived
    pub source: Vec<String>,
    /// dc:language - Language of the resource
    pub language: Vec<String>,
    /// dc:relation - Related resource
    pub relation: Vec<String>,
    /// dc:coverage - Spatial or temporal topic of the resource
    pub coverage: Vec<String>,
    /// dc:rights - Information about rights held in and over the resource
    pub rights: Vec<String>,
}

impl DublinCoreRecord {
    fn slot(&mut self, base: &str) -> Option<&mut Vec<String>> {
        Some(match base {
            "title" => &mut self.title,
            "creator" => &mut self.creator,
            "subject" => &mut self.subject,
            "description" => &mut self.description,
            "publisher" => &mut self.publisher,
            "contributor" => &mut self.contributor,
            "date" => &mut self.date,
            "type" => &mut self.dc_type,
            "format" => &mut self.format,
            "identifier" => &mut self.identifier,
            "source" => &mut self.source,
            "language" => &mut self.language,
            "relation" => &mut self.relation,
            "coverage" => &mut self.coverage,
            "rights" => &mut self.rights,
            _ => return None,
        })
    }
}

/// Base element an output element folds into, if any.
fn fold_target(element: &QdcElement) -> Option<&'static str> {
    match (element.namespace, element.name.as_str()) {
        (Namespace::Kk, "permaddress") => Some("identifier"),
        (Namespace::Kk, _) => None,
        (_, name) => base_element(name),
    }
}

/// Fold a qualified document into the fifteen base elements.
#[must_use]
pub fn qdc_to_dublin_core(doc: &QdcDocument) -> DublinCoreRecord {
    let mut dc = DublinCoreRecord::default();
    for element in doc.elements() {
        let Some(base) = fold_target(element) else {
            continue;
        };
        let folded = element.namespace != Namespace::Dc || element.name != base;
        if folded && doc.values(Namespace::Dc, base).contains(&element.value.as_str()) {
            continue;
        }
        if let Some(values) = dc.slot(base) {
            if !folded || !values.contains(&element.value) {
                values.push(element.value.clone());
            }
        }
    }
    dc
}

/// Serialize a Dublin Core record as an `oai_dc:dc` fragment.
#[must_use]
pub fn dublin_core_to_xml(dc: &DublinCoreRecord) -> String {
    let mut xml = String::new();
    writeln!(
        xml,
        "<oai_dc:dc xmlns:oai_dc=\"{OAI_DC}\" xmlns:dc=\"{DC}\" xmlns:xsi=\"{XSI}\" \
         xsi:schemaLocation=\"{OAI_DC} {OAI_DC_SCHEMA}\">"
    )
    .ok();

    write_elements(&mut xml, "dc:title", &dc.title);
    write_elements(&mut xml, "dc:creator", &dc.creator);
    write_elements(&mut xml, "dc:subject", &dc.subject);
    write_elements(&mut xml, "dc:description", &dc.description);
    write_elements(&mut xml, "dc:publisher", &dc.publisher);
    write_elements(&mut xml, "dc:contributor", &dc.contributor);
    write_elements(&mut xml, "dc:date", &dc.date);
    write_elements(&mut xml, "dc:type", &dc.dc_type);
    write_elements(&mut xml, "dc:format", &dc.format);
    write_elements(&mut xml, "dc:identifier", &dc.identifier);
    write_elements(&mut xml, "dc:source", &dc.source);
    write_elements(&mut xml, "dc:language", &dc.language);
    write_elements(&mut xml, "dc:relation", &dc.relation);
    write_elements(&mut xml, "dc:coverage", &dc.coverage);
    write_elements(&mut xml, "dc:rights", &dc.rights);

    xml.push_str("</oai_dc:dc>\n");
    xml
}

fn write_elements(xml: &mut String, tag: &str, values: &[String]) {
    for value in values {
        writeln!(xml, "  <{tag}>{}</{tag}>", escape_xml(value)).ok();
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
