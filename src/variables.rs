//! Template Variables - Projection With Conditional Fragments
//!
//! Every field is a plain string. Absent metadata projects to an empty
//! fragment, never a null marker, so downstream substitution is total.
//!
//! The RDFa attribute names in the generated fragments (dct:title,
//! dct:type, dct:source, cc:attributionName, cc:attributionURL,
//! cc:morePermissions) are a compatibility surface consumed by
//! machine-readable licensing tooling. Do not rename them.

use serde::{Deserialize, Serialize};

use crate::license::License;
use crate::metadata::LicenseMetadata;

/// The variable names a snippet template may reference.
pub const VARIABLE_NAMES: [&str; 9] = [
    "url",
    "imageWidth",
    "imageHeight",
    "image",
    "title",
    "work",
    "attribution",
    "source",
    "permissions",
];

const DCT_NS: &str = r#"xmlns:dct="http://purl.org/dc/terms/""#;
const CC_NS: &str = r#"xmlns:cc="http://creativecommons.org/ns#""#;

/// Flat variable set ready for snippet substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariables {
    pub url: String,
    pub image_width: String,
    pub image_height: String,
    pub image: String,
    pub title: String,
    pub work: String,
    pub attribution: String,
    pub source: String,
    pub permissions: String,
}

impl TemplateVariables {
    /// Project a resolved license into the flat variable set.
    pub fn project(license: &License) -> Self {
        let metadata = license.metadata.as_ref();
        Self {
            url: license.url.clone(),
            image_width: license.image_width.to_string(),
            image_height: license.image_height.to_string(),
            image: license.image.clone(),
            title: license.title.clone(),
            work: work_fragment(metadata),
            attribution: attribution_fragment(metadata),
            source: source_fragment(metadata),
            permissions: permissions_fragment(metadata),
        }
    }

    /// Look up a variable by its template name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "url" => Some(&self.url),
            "imageWidth" => Some(&self.image_width),
            "imageHeight" => Some(&self.image_height),
            "image" => Some(&self.image),
            "title" => Some(&self.title),
            "work" => Some(&self.work),
            "attribution" => Some(&self.attribution),
            "source" => Some(&self.source),
            "permissions" => Some(&self.permissions),
            _ => None,
        }
    }
}

fn work_fragment(metadata: Option<&LicenseMetadata>) -> String {
    let work_title = metadata.and_then(|m| m.work_title.as_deref());
    let format = metadata.and_then(|m| m.format.as_deref());
    match (work_title, format) {
        (Some(title), Some(uri)) => format!(
            r#"<span {} property="dct:title" href="{}" rel="dct:type">{}</span>"#,
            DCT_NS, uri, title
        ),
        (Some(title), None) => {
            format!(r#"<span {} property="dct:title">{}</span>"#, DCT_NS, title)
        }
        (None, Some(uri)) => {
            format!(r#"This <span href="{}" rel="dct:type">work</span>"#, uri)
        }
        (None, None) => "This work".to_string(),
    }
}

fn attribution_fragment(metadata: Option<&LicenseMetadata>) -> String {
    let title = metadata.and_then(|m| m.attribution_title.as_deref());
    let url = metadata.and_then(|m| m.attribution_url.as_deref());
    match (url, title) {
        (Some(url), _) => format!(
            r#"by <a {} property="cc:attributionName" href="{}" rel="cc:attributionURL">{}</a>"#,
            CC_NS,
            url,
            title.unwrap_or(url)
        ),
        (None, Some(title)) => format!(
            r#"by <span {} property="cc:attributionName">{}</span>"#,
            CC_NS, title
        ),
        (None, None) => String::new(),
    }
}

fn source_fragment(metadata: Option<&LicenseMetadata>) -> String {
    match metadata.and_then(|m| m.source.as_deref()) {
        Some(source) => format!(
            r#"<br />Based on a work at <a {} href="{}" rel="dct:source">{}</a>."#,
            DCT_NS, source, source
        ),
        None => String::new(),
    }
}

fn permissions_fragment(metadata: Option<&LicenseMetadata>) -> String {
    match metadata.and_then(|m| m.permissions.as_deref()) {
        Some(url) => format!(
            r#"<br />Permissions beyond the scope of this license may be available at <a {} href="{}" rel="cc:morePermissions">{}</a>."#,
            CC_NS, url, url
        ),
        None => String::new(),
    }
}
