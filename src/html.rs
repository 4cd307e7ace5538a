//! HTML element tree and streaming writer.
//!
//! DESIGN
//! ======
//! Controls build child structure as an element tree during their Init phase,
//! then stream it out through `HtmlWriter` during Render. The writer keeps a
//! pending-attribute list so a control can contribute attributes before its
//! begin tag is emitted, which keeps the two-step "add attributes, then render
//! the tag" lifecycle intact.

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;

/// Error produced when a control misuses the writer.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("unclosed tag: <{0}>")]
    UnclosedTag(String),
    #[error("no open tag to close")]
    NoOpenTag,
}

/// A node in a control's child tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(HtmlElement),
    Text(String),
}

/// A single HTML element with ordered attributes and child nodes.
#[derive(Debug, Clone)]
pub struct HtmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    data_context: Option<&'static str>,
}

impl HtmlElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            data_context: None,
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any existing value in place. First-seen
    /// attribute order is preserved.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Record the view-model type this element's template binds against.
    pub fn set_data_context<T>(&mut self) {
        self.data_context = Some(std::any::type_name::<T>());
    }

    pub(crate) fn set_data_context_name(&mut self, name: Option<&'static str>) {
        self.data_context = name;
    }

    #[must_use]
    pub fn data_context(&self) -> Option<&'static str> {
        self.data_context
    }

    /// Stream this element and its subtree through the writer.
    ///
    /// # Errors
    ///
    /// Propagates writer tag-balance errors.
    pub fn render(&self, writer: &mut HtmlWriter) -> Result<(), HtmlError> {
        for (name, value) in &self.attributes {
            writer.add_attribute(name, value);
        }
        writer.render_begin_tag(&self.tag);
        for child in &self.children {
            match child {
                Node::Element(e) => e.render(writer)?,
                Node::Text(t) => writer.write_text(t),
            }
        }
        writer.render_end_tag()
    }
}

/// Streaming HTML writer. Attributes are queued with [`Self::add_attribute`]
/// and flushed onto the next begin tag.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    pending: Vec<(String, String)>,
    open: Vec<String>,
}

impl HtmlWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an attribute for the next begin tag. Re-adding a queued name
    /// replaces its value.
    pub fn add_attribute(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.pending.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_owned();
        } else {
            self.pending.push((name.to_owned(), value.to_owned()));
        }
    }

    pub fn render_begin_tag(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in self.pending.drain(..) {
            self.out.push(' ');
            self.out.push_str(&name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attribute(&value));
            self.out.push('"');
        }
        self.out.push('>');
        self.open.push(tag.to_owned());
    }

    /// Close the most recently opened tag.
    ///
    /// # Errors
    ///
    /// `NoOpenTag` if every opened tag is already closed.
    pub fn render_end_tag(&mut self) -> Result<(), HtmlError> {
        let tag = self.open.pop().ok_or(HtmlError::NoOpenTag)?;
        self.out.push_str("</");
        self.out.push_str(&tag);
        self.out.push('>');
        Ok(())
    }

    /// Write escaped text content.
    pub fn write_text(&mut self, text: &str) {
        self.out.push_str(&escape_text(text));
    }

    /// Finish writing and return the markup.
    ///
    /// # Errors
    ///
    /// `UnclosedTag` if a begin tag was never closed.
    pub fn into_string(mut self) -> Result<String, HtmlError> {
        if let Some(tag) = self.open.pop() {
            return Err(HtmlError::UnclosedTag(tag));
        }
        Ok(self.out)
    }
}

/// Escape a value for a double-quoted attribute position.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape element text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
