//! Request-scoped rendering context and the control lifecycle driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RequestContext` exists per server request. Init, PreRender, and
//! Render run sequentially and synchronously on it with no suspension
//! points; instances are never shared across requests, and controls are
//! discarded with the response.

use crate::html::{HtmlError, HtmlWriter};
use crate::resources::ResourceManager;

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;

/// Per-request rendering state.
#[derive(Debug, Default)]
pub struct RequestContext {
    pub resource_manager: ResourceManager,
}

impl RequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Server-side control lifecycle, driven by the host once per request.
pub trait Control {
    /// Materialize child structure.
    fn on_init(&mut self, ctx: &mut RequestContext);

    /// Declare page-level requirements such as client resources.
    fn on_pre_render(&mut self, ctx: &mut RequestContext) {
        let _ = ctx;
    }

    /// Write the control's markup.
    ///
    /// # Errors
    ///
    /// Returns writer tag-balance errors.
    fn render(&self, writer: &mut HtmlWriter, ctx: &RequestContext) -> Result<(), HtmlError>;
}

/// Drive a control through Init, PreRender, and Render in order and return
/// its markup.
///
/// # Errors
///
/// Propagates writer errors from the control's `render` implementation.
pub fn render_to_string(
    control: &mut dyn Control,
    ctx: &mut RequestContext,
) -> Result<String, HtmlError> {
    control.on_init(ctx);
    control.on_pre_render(ctx);
    let mut writer = HtmlWriter::new();
    control.render(&mut writer, ctx)?;
    writer.into_string()
}
