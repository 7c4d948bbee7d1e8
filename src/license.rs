//! License Resolution - Defaults Absorb Bad Input
//!
//! Every selector lands on a closed variant before composition, so a
//! resolved license is always fully populated. There is no failure path.

use serde::{Deserialize, Serialize};

use crate::attributes::{Adaptations, Attributes};
use crate::metadata::LicenseMetadata;
use crate::CC_VERSION;

/// The six supported license variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseCode {
    By,
    ByNc,
    ByNcNd,
    ByNcSa,
    ByNd,
    BySa,
}

impl LicenseCode {
    pub const ALL: [LicenseCode; 6] = [
        Self::By,
        Self::ByNc,
        Self::ByNcNd,
        Self::ByNcSa,
        Self::ByNd,
        Self::BySa,
    ];

    /// Parse a license shortname. Unrecognized values are None; the
    /// resolver falls back to `By`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "by" => Some(Self::By),
            "by-nc" => Some(Self::ByNc),
            "by-nc-nd" => Some(Self::ByNcNd),
            "by-nc-sa" => Some(Self::ByNcSa),
            "by-nd" => Some(Self::ByNd),
            "by-sa" => Some(Self::BySa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::By => "by",
            Self::ByNc => "by-nc",
            Self::ByNcNd => "by-nc-nd",
            Self::ByNcSa => "by-nc-sa",
            Self::ByNd => "by-nd",
            Self::BySa => "by-sa",
        }
    }

    /// Human-readable license name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::By => "Attribution",
            Self::ByNc => "Attribution-NonCommercial",
            Self::ByNcNd => "Attribution-NonCommercial-NoDerivatives",
            Self::ByNcSa => "Attribution-NonCommercial-ShareAlike",
            Self::ByNd => "Attribution-NoDerivatives",
            Self::BySa => "Attribution-ShareAlike",
        }
    }

    /// Canonical license URL.
    pub fn url(&self) -> String {
        format!(
            "http://creativecommons.org/licenses/{}/{}/",
            self.as_str(),
            CC_VERSION
        )
    }

    /// Choose the code from the adaptations / commercial pair.
    ///
    /// No adaptations choice (or an unrecognized one) selects `By`
    /// before commercial is consulted.
    fn choose(adaptations: Option<Adaptations>, commercial: bool) -> Self {
        match adaptations {
            Some(Adaptations::Yes) if commercial => Self::By,
            Some(Adaptations::Yes) => Self::ByNc,
            Some(Adaptations::No) if commercial => Self::ByNd,
            Some(Adaptations::No) => Self::ByNcNd,
            Some(Adaptations::ShareAlike) if commercial => Self::BySa,
            Some(Adaptations::ShareAlike) => Self::ByNcSa,
            None => Self::By,
        }
    }
}

/// Badge image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSize {
    #[serde(rename = "88x31")]
    Normal,
    #[serde(rename = "80x15")]
    Compact,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Normal
    }
}

impl IconSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "88x31" => Some(Self::Normal),
            "80x15" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "88x31",
            Self::Compact => "80x15",
        }
    }

    /// Width and height, read off the size token itself.
    pub fn dimensions(&self) -> (u32, u32) {
        let mut parts = self.as_str().split('x');
        let width = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let height = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        (width, height)
    }
}

/// The resolved license data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub url: String,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LicenseMetadata>,
}

impl License {
    /// Resolve an attribute set into a fully populated license.
    ///
    /// An explicit `license` attribute wins over the adaptations /
    /// commercial derivation. Unrecognized selectors land on `by`,
    /// unrecognized icon sizes on 88x31.
    pub fn resolve(attributes: &Attributes) -> Self {
        let code = match attributes.license() {
            Some(selector) => LicenseCode::parse(selector).unwrap_or(LicenseCode::By),
            None => LicenseCode::choose(attributes.adaptations(), attributes.commercial()),
        };
        let mut license = Self::compose(code, attributes.icon());
        license.metadata = LicenseMetadata::from_attributes(attributes);
        license
    }

    fn compose(code: LicenseCode, icon: IconSize) -> Self {
        let (image_width, image_height) = icon.dimensions();
        Self {
            url: code.url(),
            image: format!(
                "https://i.creativecommons.org/l/{}/{}/{}.png",
                code.as_str(),
                CC_VERSION,
                icon.as_str()
            ),
            image_width,
            image_height,
            title: format!(
                "Creative Commons {} {} International License",
                code.title(),
                CC_VERSION
            ),
            metadata: None,
        }
    }
}
