//! License Metadata - Optional Descriptive Fields
//!
//! Field values survive only when non-empty. A format label resolves to
//! its Dublin Core type URI or is dropped; the raw label is never stored.

use serde::{Deserialize, Serialize};

use crate::attributes::{non_empty, Attributes};

/// What kind of work is being licensed, by user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkFormat {
    Audio,
    Video,
    Image,
    Text,
    Dataset,
    Interactive,
}

impl WorkFormat {
    /// Parse the user-facing label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "image" => Some(Self::Image),
            "text" => Some(Self::Text),
            "dataset" => Some(Self::Dataset),
            "interactive" => Some(Self::Interactive),
            _ => None,
        }
    }

    /// The Dublin Core type URI for this kind of work.
    pub fn dcmi_type_uri(&self) -> &'static str {
        match self {
            Self::Audio => "http://purl.org/dc/dcmitype/Sound",
            Self::Video => "http://purl.org/dc/dcmitype/MovingImage",
            Self::Image => "http://purl.org/dc/dcmitype/StillImage",
            Self::Text => "http://purl.org/dc/dcmitype/Text",
            Self::Dataset => "http://purl.org/dc/dcmitype/Dataset",
            Self::Interactive => "http://purl.org/dc/dcmitype/InteractiveResource",
        }
    }
}

/// Optional descriptive metadata attached to a resolved license.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    /// Resolved Dublin Core type URI, never the raw label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl LicenseMetadata {
    /// Extract metadata from the attribute set. None when no field
    /// carries a value.
    pub fn from_attributes(attributes: &Attributes) -> Option<Self> {
        let metadata = Self {
            work_title: owned(&attributes.work_title),
            source: owned(&attributes.source),
            attribution_title: owned(&attributes.attribution_title),
            attribution_url: owned(&attributes.attribution_url),
            permissions: owned(&attributes.permissions),
            format: non_empty(&attributes.format)
                .and_then(WorkFormat::parse)
                .map(|format| format.dcmi_type_uri().to_string()),
        };
        if metadata == Self::default() {
            None
        } else {
            Some(metadata)
        }
    }
}

fn owned(value: &Option<String>) -> Option<String> {
    non_empty(value).map(str::to_string)
}
