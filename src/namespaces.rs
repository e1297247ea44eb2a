//! Namespace definitions and the namespace classifier.
//!
//! The qualified document binds three prefixes inside one container element:
//! `dc` for the fifteen base elements, `dcterms` for term refinements, and
//! `kk` for the National Library extension elements (file links and
//! permanent addresses).

use std::fmt;

/// Container namespace of the qualified Dublin Core schema.
pub const QDC: &str = "http://epubs.cclrc.ac.uk/xmlns/qdc/";

/// Location of the qualified Dublin Core XML schema.
pub const QDC_SCHEMA: &str = "http://epubs.cclrc.ac.uk/xsd/qdc.xsd";

/// Unqualified Dublin Core element namespace.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// DCMI term refinement namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// National Library extension namespace.
///
/// Finna harvests the extension elements under the DCMI terms URI, so the
/// `kk` prefix is bound to the same namespace as `dcterms`.
pub const KK: &str = DCTERMS;

/// XML Schema instance namespace, used for `xsi:schemaLocation`.
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// OAI Dublin Core container namespace (unrefined view).
pub const OAI_DC: &str = "http://www.openarchives.org/OAI/2.0/oai_dc/";

/// OAI Dublin Core schema location.
pub const OAI_DC_SCHEMA: &str = "http://www.openarchives.org/OAI/2.0/oai_dc.xsd";

/// The fifteen base Dublin Core element names.
pub const DC_ELEMENT_NAMES: [&str; 15] = [
    "title",
    "creator",
    "subject",
    "description",
    "publisher",
    "contributor",
    "date",
    "type",
    "format",
    "identifier",
    "source",
    "language",
    "relation",
    "coverage",
    "rights",
];

/// Output namespace of a generated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Namespace {
    /// Base (unqualified) Dublin Core.
    Dc,
    /// DCMI term refinements.
    Dcterms,
    /// National Library extensions.
    Kk,
}

impl Namespace {
    /// The prefix bound to this namespace on the container element.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Dc => "dc",
            Self::Dcterms => "dcterms",
            Self::Kk => "kk",
        }
    }

    /// The namespace URI.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Dc => DC,
            Self::Dcterms => DCTERMS,
            Self::Kk => KK,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Returns true if `name` is one of the fifteen base Dublin Core elements.
#[must_use]
pub fn is_base_element(name: &str) -> bool {
    DC_ELEMENT_NAMES.contains(&name)
}

/// Classify a field name into its output namespace.
///
/// Base element names map to [`Namespace::Dc`]; every other name, known or
/// not, maps to [`Namespace::Dcterms`].
#[must_use]
pub fn namespace_for(name: &str) -> Namespace {
    if is_base_element(name) {
        Namespace::Dc
    } else {
        Namespace::Dcterms
    }
}
