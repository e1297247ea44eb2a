//! The generated qualified Dublin Core document.
//!
//! A [`QdcDocument`] is an append-only list of [`QdcElement`]s under one
//! `qdc:qualifieddc` container. It is written with `quick-xml`, either as a
//! standalone string or into a caller's writer so it can sit inside an
//! OAI-PMH `<metadata>` node.
//!
//! Attributes keep insertion order and elements keep emission order, so the
//! same document always serializes to the same bytes.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

use crate::error::{QdcError, Result};
use crate::namespaces::{Namespace, QDC, QDC_SCHEMA, XSI};

/// Qualified name of the container element.
pub const CONTAINER: &str = "qdc:qualifieddc";

/// One output element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QdcElement {
    /// Namespace the element is written in
    pub namespace: Namespace,
    /// Local element name
    pub name: String,
    /// Text content
    pub value: String,
    /// Attributes in insertion order
    pub attributes: Vec<(&'static str, String)>,
}

impl QdcElement {
    /// Create an element without attributes.
    pub fn new(namespace: Namespace, name: impl Into<String>, value: impl Into<String>) -> Self {
        QdcElement {
            namespace,
            name: name.into(),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Value of an attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Prefixed element name, e.g. `dcterms:created`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace.prefix(), self.name)
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let qname = self.qualified_name();
        let mut start = BytesStart::new(qname.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((*key, value.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(&self.value)))?;
        writer.write_event(Event::End(BytesEnd::new(qname.as_str())))?;
        Ok(())
    }
}

/// A qualified Dublin Core document for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QdcDocument {
    elements: Vec<QdcElement>,
}

impl QdcDocument {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn push(&mut self, element: QdcElement) {
        self.elements.push(element);
    }

    /// Append an element without attributes.
    pub fn append(&mut self, namespace: Namespace, name: &str, value: impl Into<String>) {
        self.push(QdcElement::new(namespace, name, value));
    }

    /// All elements in emission order.
    #[must_use]
    pub fn elements(&self) -> &[QdcElement] {
        &self.elements
    }

    /// Elements with the given namespace and local name.
    pub fn find<'a>(
        &'a self,
        namespace: Namespace,
        name: &'a str,
    ) -> impl Iterator<Item = &'a QdcElement> + 'a {
        self.elements
            .iter()
            .filter(move |e| e.namespace == namespace && e.name == name)
    }

    /// Text values of the elements with the given namespace and local name.
    #[must_use]
    pub fn values(&self, namespace: Namespace, name: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.namespace == namespace && e.name == name)
            .map(|e| e.value.as_str())
            .collect()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Write the container and its children into `writer`.
    ///
    /// The container declares the `qdc`, `dc`, `dcterms`, `kk` and `xsi`
    /// prefixes and carries the schema location.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let schema_location = format!("{QDC} {QDC_SCHEMA}");
        let mut root = BytesStart::new(CONTAINER);
        root.push_attribute(("xmlns:qdc", QDC));
        for ns in [Namespace::Dc, Namespace::Dcterms, Namespace::Kk] {
            let attr = format!("xmlns:{}", ns.prefix());
            root.push_attribute((attr.as_str(), ns.uri()));
        }
        root.push_attribute(("xmlns:xsi", XSI));
        root.push_attribute(("xsi:schemaLocation", schema_location.as_str()));

        writer.write_event(Event::Start(root))?;
        for element in &self.elements {
            element.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(CONTAINER)))?;
        Ok(())
    }

    /// Serialize the document as an indented XML fragment (no declaration).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| QdcError::XmlWrite(e.to_string()))
    }
}
