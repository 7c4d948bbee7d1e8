//! Attribute Boundary - Normalize Once, Default Everywhere
//!
//! Raw inputs cross this module exactly once. Everything past it works
//! with closed enums and non-empty strings.

use serde::{Deserialize, Serialize};

use crate::license::IconSize;

/// The attribute names recognized at the boundary, in their user-facing
/// hyphenated form.
pub const COMPONENT_ATTRIBUTES: [&str; 10] = [
    "license",
    "adaptations",
    "commercial",
    "icon",
    "work-title",
    "source",
    "attribution-title",
    "attribution-url",
    "permissions",
    "format",
];

/// Raw selection and metadata inputs, keyed in camelCase form.
///
/// Hyphenated payload keys are accepted as aliases. An empty string is
/// treated as absent everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attributes {
    pub license: Option<String>,
    pub adaptations: Option<String>,
    pub commercial: Option<String>,
    pub icon: Option<String>,
    #[serde(alias = "work-title")]
    pub work_title: Option<String>,
    pub source: Option<String>,
    #[serde(alias = "attribution-title")]
    pub attribution_title: Option<String>,
    #[serde(alias = "attribution-url")]
    pub attribution_url: Option<String>,
    pub permissions: Option<String>,
    pub format: Option<String>,
}

impl Attributes {
    /// Collect attributes from (name, value) pairs.
    ///
    /// Names are normalized from their hyphenated form to camelCase;
    /// unrecognized names contribute nothing.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            let key = attr_to_camel(name.as_ref());
            let value = value.into();
            match key.as_str() {
                "license" => attributes.license = Some(value),
                "adaptations" => attributes.adaptations = Some(value),
                "commercial" => attributes.commercial = Some(value),
                "icon" => attributes.icon = Some(value),
                "workTitle" => attributes.work_title = Some(value),
                "source" => attributes.source = Some(value),
                "attributionTitle" => attributes.attribution_title = Some(value),
                "attributionUrl" => attributes.attribution_url = Some(value),
                "permissions" => attributes.permissions = Some(value),
                "format" => attributes.format = Some(value),
                _ => {}
            }
        }
        attributes
    }

    /// Explicit license selector, if set to a non-empty value.
    pub fn license(&self) -> Option<&str> {
        non_empty(&self.license)
    }

    /// Adaptations choice. None covers both an absent attribute and an
    /// unrecognized value.
    pub fn adaptations(&self) -> Option<Adaptations> {
        non_empty(&self.adaptations).and_then(Adaptations::parse)
    }

    /// Commercial-use permission. Absent means allowed; a present value
    /// grants it only for the literal string "true".
    pub fn commercial(&self) -> bool {
        match non_empty(&self.commercial) {
            Some(value) => value == "true",
            None => true,
        }
    }

    /// Badge size selector, defaulting to 88x31.
    pub fn icon(&self) -> IconSize {
        non_empty(&self.icon).and_then(IconSize::parse).unwrap_or_default()
    }
}

/// Whether adaptations of the work may be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Adaptations {
    Yes,
    No,
    ShareAlike,
}

impl Adaptations {
    /// Parse the attribute value. Anything outside the three recognized
    /// tokens is None; the resolver treats that the same as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "share-alike" => Some(Self::ShareAlike),
            _ => None,
        }
    }
}

/// Convert a hyphenated attribute name to its camelCase key form.
/// ex: work-title => workTitle
pub fn attr_to_camel(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    camel
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
