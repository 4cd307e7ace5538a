//! A `<div>` control whose content loads through a deferred client postback.
//!
//! DESIGN
//! ======
//! The panel materializes its templates into child containers during Init,
//! declares the integration script during PreRender, and emits a
//! `lzp-loadable-panel` binding descriptor during Render. It performs no I/O
//! itself; the client runtime owns the postback, and the panel only shapes
//! what the runtime sees. Required properties (content template and load
//! command) are enforced by construction.

use crate::binding::{BindingGroup, CommandBinding, ValueBinding, postback_function};
use crate::config::JAVASCRIPT_RESOURCE_NAME;
use crate::context::{Control, RequestContext};
use crate::html::{HtmlElement, HtmlError, HtmlWriter, Node};
use crate::template::Template;

#[cfg(test)]
#[path = "loadable_panel_test.rs"]
mod tests;

/// Name of the client binding handler the descriptor is emitted under.
pub const BINDING_HANDLER: &str = "lzp-loadable-panel";

/// A server-rendered panel that defers loading its content until a
/// client-triggered `load` command completes.
pub struct LoadablePanel {
    element: HtmlElement,
    content_template: Box<dyn Template>,
    progress_template: Option<Box<dyn Template>>,
    load: CommandBinding,
    hide_until_loaded: bool,
    loading_items: Option<ValueBinding>,
}

impl LoadablePanel {
    /// Create a panel from its required properties: the content template and
    /// the command that loads its data.
    #[must_use]
    pub fn new(content_template: impl Template + 'static, load: CommandBinding) -> Self {
        Self {
            element: HtmlElement::new("div"),
            content_template: Box::new(content_template),
            progress_template: None,
            load,
            hide_until_loaded: false,
            loading_items: None,
        }
    }

    /// Template shown while the panel is loading.
    #[must_use]
    pub fn with_progress_template(mut self, template: impl Template + 'static) -> Self {
        self.progress_template = Some(Box::new(template));
        self
    }

    /// Keep the content container hidden (inline `display:none;`) until the
    /// first load completes.
    #[must_use]
    pub fn hide_until_loaded(mut self, hide: bool) -> Self {
        self.hide_until_loaded = hide;
        self
    }

    /// Expose a live binding the client updates with the set of panels
    /// currently loading.
    #[must_use]
    pub fn with_loading_items(mut self, binding: ValueBinding) -> Self {
        self.loading_items = Some(binding);
        self
    }

    /// Declare the view-model type the panel's templates bind against.
    #[must_use]
    pub fn with_data_context<T>(mut self) -> Self {
        self.element.set_data_context::<T>();
        self
    }

    /// Set an attribute on the panel's root `<div>`.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.element.set_attribute(name, value);
        self
    }

    /// The root element, including children materialized at Init.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Build the client binding descriptor for this panel.
    #[must_use]
    pub fn control_binding(&self) -> BindingGroup {
        let mut binding = BindingGroup::new();
        binding.add("load", postback_function(&self.load));
        if self.progress_template.is_some() {
            binding.add_bool("progressElement", true);
        }
        if let Some(items) = &self.loading_items {
            binding.add("loadingItems", items.expression());
        }
        binding
    }

    fn build_progress(&self, ctx: &mut RequestContext) -> HtmlElement {
        let mut progress = HtmlElement::new("div");
        progress.set_data_context_name(self.element.data_context());
        if let Some(template) = &self.progress_template {
            template.build_content(ctx, &mut progress);
        }
        progress
    }

    fn build_content(&self, ctx: &mut RequestContext) -> HtmlElement {
        let mut content = HtmlElement::new("div");
        if self.hide_until_loaded {
            content.set_attribute("style", "display:none;");
        }
        self.content_template.build_content(ctx, &mut content);
        content
    }
}

impl Control for LoadablePanel {
    fn on_init(&mut self, ctx: &mut RequestContext) {
        if self.progress_template.is_some() {
            let progress = self.build_progress(ctx);
            self.element.add_child(Node::Element(progress));
        }
        let content = self.build_content(ctx);
        self.element.add_child(Node::Element(content));
        tracing::debug!(
            command = %self.load.command(),
            progress = self.progress_template.is_some(),
            "loadable panel initialized"
        );
    }

    fn on_pre_render(&mut self, ctx: &mut RequestContext) {
        ctx.resource_manager
            .add_required_resource(JAVASCRIPT_RESOURCE_NAME);
    }

    fn render(&self, writer: &mut HtmlWriter, _ctx: &RequestContext) -> Result<(), HtmlError> {
        for (name, value) in self.element.attributes() {
            writer.add_attribute(name, value);
        }
        let descriptor = self.control_binding().to_descriptor();
        writer.add_attribute("data-bind", &format!("{BINDING_HANDLER}: {descriptor}"));
        writer.render_begin_tag(self.element.tag());
        for child in self.element.children() {
            match child {
                Node::Element(e) => e.render(writer)?,
                Node::Text(t) => writer.write_text(t),
            }
        }
        writer.render_end_tag()
    }
}
