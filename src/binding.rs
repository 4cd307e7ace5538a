//! Client binding expressions and postback script generation.
//!
//! DESIGN
//! ======
//! Server-side controls describe client behavior through a binding
//! descriptor: an ordered list of `key: <js expression>` entries rendered
//! into a `data-bind` attribute. Commands are referenced by name and invoked
//! through the client runtime's postback call; the generated function defers
//! through `window.setTimeout` so invocation never runs inside the caller's
//! event dispatch.

#[cfg(test)]
#[path = "binding_test.rs"]
mod tests;

/// A live value-binding expression evaluated by the client runtime against
/// the page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueBinding {
    expression: String,
}

impl ValueBinding {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// The raw expression, e.g. `LoadingItems`.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// A reference to a named server command invoked via postback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBinding {
    command: String,
}

impl CommandBinding {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Ordered client binding descriptor rendered into a `data-bind` attribute.
#[derive(Debug, Default, Clone)]
pub struct BindingGroup {
    entries: Vec<(&'static str, String)>,
}

impl BindingGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw JavaScript expression under `key`.
    pub fn add(&mut self, key: &'static str, expression: impl Into<String>) {
        self.entries.push((key, expression.into()));
    }

    /// Add a JavaScript boolean literal under `key`.
    pub fn add_bool(&mut self, key: &'static str, value: bool) {
        self.add(key, if value { "true" } else { "false" });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as a JavaScript object literal, entries in insertion order.
    #[must_use]
    pub fn to_descriptor(&self) -> String {
        if self.entries.is_empty() {
            return "{ }".to_owned();
        }
        let inner = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {inner} }}")
    }
}

/// Generate the inline client function that issues a deferred postback for
/// `command`, forwarding its call-time arguments as the command parameters.
///
/// The function gathers `arguments` into an array, defers through
/// `window.setTimeout`, and invokes the runtime with the current element as
/// context. Exactly one postback is issued per invocation.
#[must_use]
pub fn postback_function(command: &CommandBinding) -> String {
    let name = js_string(command.command());
    format!(
        "(function(){{var ar=[].slice.call(arguments);\
         return window.setTimeout(function(){{return lzp.postback({name},$element,ar);}},0);}})"
    )
}

/// Quote a value as a JavaScript string literal so arbitrary command names
/// cannot break out of the generated script.
pub(crate) fn js_string(value: &str) -> String {
    // Serializing a string never fails; the fallback is unreachable.
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_owned())
}
