use super::{advanced, Blob};
use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Renders embedded templates against a serializable context.
///
/// Output is written verbatim: no auto-escaping, trailing newlines kept,
/// and block tags do not leave blank lines behind. Undefined variables
/// are errors so a misspelt field never renders as an empty string.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        // partials pulled in with {% include %}
        let handler = advanced::WEBSOCKET_HANDLER;
        env.add_template(handler.name, handler.source)?;

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, blob: &Blob, context: &S) -> Result<String> {
        Ok(self.env.render_named_str(blob.name, blob.source, context)?)
    }
}
