//! Embedded template registry
//!
//! Every file a generated project contains is compiled into the binary.
//! Framework and driver tables are keyed by the closed choice enums, so a
//! lookup can never miss; templates that only exist for some choices are
//! `Option`al in their table.

/// An embedded template: its registry name and source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob {
    pub name: &'static str,
    pub source: &'static str,
}

/// Embed `templates/<path>` under its own path as the template name.
///
/// Declared ahead of the submodules so it is in scope for all of them.
macro_rules! blob {
    ($path:literal) => {
        $crate::templates::Blob {
            name: $path,
            source: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)),
        }
    };
}

pub mod advanced;
pub mod driver;
pub mod framework;
pub mod global;
mod renderer;

pub use driver::{driver_templates, DriverTemplates};
pub use framework::{framework_templates, FrameworkTemplates};
pub use renderer::TemplateRenderer;
