//! Compile-time embedded client assets.
//!
//! The crate ships its base client runtime, the panel integration script, and
//! a bundled third-party spinner as named payloads. The embedding application
//! serves them under [`ASSET_ROUTE`]; resource locations point there.

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;

/// Route prefix embedded assets are served under.
pub const ASSET_ROUTE: &str = "/_lzp";

/// Lookup key of the base client runtime script.
pub const VIEWHOST_JS: &str = "viewhost.js";
/// Lookup key of the panel integration script.
pub const LAZYPANEL_JS: &str = "lazypanel.js";
/// Lookup key of the bundled spinner script.
pub const SPIN_JS: &str = "spin.js";
/// Lookup key of the bundled spinner stylesheet.
pub const SPIN_CSS: &str = "spin.css";

/// One embedded asset payload.
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedAsset {
    pub content_type: &'static str,
    pub body: &'static str,
}

/// Look up an embedded asset by key.
#[must_use]
pub fn lookup(key: &str) -> Option<EmbeddedAsset> {
    match key {
        VIEWHOST_JS => Some(EmbeddedAsset {
            content_type: "text/javascript",
            body: include_str!("../assets/viewhost.js"),
        }),
        LAZYPANEL_JS => Some(EmbeddedAsset {
            content_type: "text/javascript",
            body: include_str!("../assets/lazypanel.js"),
        }),
        SPIN_JS => Some(EmbeddedAsset {
            content_type: "text/javascript",
            body: include_str!("../assets/vendor/spin.js"),
        }),
        SPIN_CSS => Some(EmbeddedAsset {
            content_type: "text/css",
            body: include_str!("../assets/vendor/spin.css"),
        }),
        _ => None,
    }
}
