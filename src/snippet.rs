//! Snippet Rendering - Single Entry Point
//!
//! Templates are validated at construction: a placeholder outside the
//! known variable set is rejected before any render happens, so
//! rendering itself cannot fail.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::attributes::Attributes;
use crate::license::License;
use crate::variables::{TemplateVariables, VARIABLE_NAMES};

/// The built-in attribution snippet skeleton.
pub const DEFAULT_TEMPLATE: &str = r#"<a class="image" rel="license" href="{{url}}"><img alt="Creative Commons License" style="border-width:0" width="{{imageWidth}}" height="{{imageHeight}}" src="{{image}}" /></a>
<br />
{{work}} {{attribution}} is licensed under a <a class="title" rel="license" href="{{url}}">{{title}}</a>.{{source}}{{permissions}}
"#;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown placeholder: {0}")]
    UnknownPlaceholder(String),
}

/// A validated snippet template with {{name}} placeholders.
#[derive(Debug, Clone)]
pub struct SnippetTemplate {
    text: String,
}

impl SnippetTemplate {
    /// Validate and wrap a template string.
    pub fn new(text: impl Into<String>) -> Result<Self, RenderError> {
        let text = text.into();
        for name in placeholders(&text) {
            if !VARIABLE_NAMES.contains(&name) {
                return Err(RenderError::UnknownPlaceholder(name.to_string()));
            }
        }
        Ok(Self { text })
    }

    /// Load a template from disk.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        Self::new(fs::read_to_string(path)?)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute every placeholder with its variable.
    ///
    /// Text outside placeholders passes through verbatim, including a
    /// lone `{{` without a closer.
    pub fn substitute(&self, variables: &TemplateVariables) -> String {
        let mut output = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    output.push_str(&rest[..start]);
                    match variables.get(&after[..end]) {
                        Some(value) => output.push_str(value),
                        // Unreachable on a validated template; an
                        // unknown token is left in place.
                        None => output.push_str(&rest[start..start + 2 + end + 2]),
                    }
                    rest = &after[end + 2..];
                }
                None => break,
            }
        }
        output.push_str(rest);
        output
    }
}

impl Default for SnippetTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// The rendering pipeline: resolve, project, substitute.
pub struct SnippetRenderer {
    template: SnippetTemplate,
}

impl SnippetRenderer {
    pub fn new(template: SnippetTemplate) -> Self {
        Self { template }
    }

    /// Render the attribution snippet for an attribute set.
    ///
    /// Never fails: resolution absorbs malformed input and the template
    /// was validated up front.
    pub fn render(&self, attributes: &Attributes) -> String {
        let license = License::resolve(attributes);
        let variables = TemplateVariables::project(&license);
        self.template.substitute(&variables)
    }

    pub fn template(&self) -> &SnippetTemplate {
        &self.template
    }
}

impl Default for SnippetRenderer {
    fn default() -> Self {
        Self::new(SnippetTemplate::default())
    }
}

fn placeholders(text: &str) -> Vec<&str> {
    let mut names = vec![];
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    names
}
