//! CcLicense Core - Creative Commons Attribution Compiler
//!
//! # The Four Laws (Non-Negotiable)
//! 1. Resolution Never Fails
//! 2. Defaults Absorb Bad Input
//! 3. Fragments Are Contracts
//! 4. Output Is Deterministic

pub mod attributes;
pub mod license;
pub mod metadata;
pub mod snippet;
pub mod variables;

pub use attributes::{attr_to_camel, Adaptations, Attributes, COMPONENT_ATTRIBUTES};
pub use license::{IconSize, License, LicenseCode};
pub use metadata::{LicenseMetadata, WorkFormat};
pub use snippet::{RenderError, SnippetRenderer, SnippetTemplate, DEFAULT_TEMPLATE};
pub use variables::{TemplateVariables, VARIABLE_NAMES};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CC_VERSION: &str = "4.0";
