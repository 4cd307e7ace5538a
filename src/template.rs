//! Content templates.
//!
//! A template is a producer of child UI nodes, materialized exactly once into
//! a container element during a control's Init phase. Plain closures over
//! `(context, container)` are templates, so callers rarely implement the
//! trait by hand.

use crate::context::RequestContext;
use crate::html::HtmlElement;

/// A producer of child UI nodes.
pub trait Template {
    /// Materialize this template's content into `container`.
    fn build_content(&self, ctx: &mut RequestContext, container: &mut HtmlElement);
}

impl<F> Template for F
where
    F: Fn(&mut RequestContext, &mut HtmlElement),
{
    fn build_content(&self, ctx: &mut RequestContext, container: &mut HtmlElement) {
        self(ctx, container);
    }
}
