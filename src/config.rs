//! Host configuration: markup control registrations, the resource registry,
//! and the configuration extension that wires the loadable panel in.
//!
//! ARCHITECTURE
//! ============
//! The embedding application assembles one `HostConfiguration` at startup,
//! calls the configuration extension once, and treats the result as
//! immutable for the process lifetime. Re-running the extension replaces the
//! same entries; it never duplicates them.

use serde::{Deserialize, Serialize};

use crate::assets;
use crate::resources::{Resource, ResourceLocation, ResourceRegistry};

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Resource name of the base client runtime, pre-registered by
/// [`HostConfiguration::new`].
pub const VIEWHOST_RESOURCE_NAME: &str = "viewhost";
/// Resource name of the panel integration script.
pub const JAVASCRIPT_RESOURCE_NAME: &str = "lazypanel";
/// Resource name of the bundled spinner script.
pub const SPIN_RESOURCE_NAME: &str = "spin";
/// Resource name of the bundled spinner stylesheet.
pub const SPIN_CSS_RESOURCE_NAME: &str = "spin.css";

/// Tag prefix the panel is addressed with in markup.
pub const TAG_PREFIX: &str = "lzp";

/// One control library made addressable from markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRegistration {
    /// Crate providing the control types.
    pub crate_name: String,
    /// Module path within the crate.
    pub module: String,
    /// Prefix the controls are addressed with in markup.
    pub tag_prefix: String,
}

/// Markup configuration: which control libraries are addressable and under
/// which tag prefixes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarkupConfiguration {
    controls: Vec<ControlRegistration>,
}

impl MarkupConfiguration {
    /// Register a control library. A registration with the same tag prefix
    /// replaces the existing entry instead of duplicating it.
    pub fn register_control(&mut self, registration: ControlRegistration) {
        if let Some(existing) = self
            .controls
            .iter_mut()
            .find(|c| c.tag_prefix == registration.tag_prefix)
        {
            if *existing != registration {
                tracing::warn!(tag_prefix = %registration.tag_prefix, "replacing control registration");
            }
            *existing = registration;
        } else {
            self.controls.push(registration);
        }
    }

    #[must_use]
    pub fn controls(&self) -> &[ControlRegistration] {
        &self.controls
    }
}

/// Application-level configuration object assembled once at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostConfiguration {
    pub markup: MarkupConfiguration,
    pub resources: ResourceRegistry,
}

impl HostConfiguration {
    /// Create a configuration with the base client runtime pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut resources = ResourceRegistry::new();
        resources.register(
            VIEWHOST_RESOURCE_NAME,
            Resource::script(
                ResourceLocation::Embedded {
                    key: assets::VIEWHOST_JS.to_owned(),
                },
                &[],
            ),
        );
        Self {
            markup: MarkupConfiguration::default(),
            resources,
        }
    }
}

impl Default for HostConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the loadable panel control and its client resources.
///
/// Adds the `lzp` tag prefix and exactly three resources: the panel
/// integration script, the bundled spinner script, and the spinner
/// stylesheet. Dependency edges put the stylesheet and spinner script before
/// the integration script, with the base `viewhost` runtime ahead of all of
/// them. Calling this twice replaces the same entries.
pub fn add_loadable_panel_configuration(config: &mut HostConfiguration) {
    config.markup.register_control(ControlRegistration {
        crate_name: env!("CARGO_PKG_NAME").to_owned(),
        module: "lazypanel::controls".to_owned(),
        tag_prefix: TAG_PREFIX.to_owned(),
    });

    config.resources.register(
        JAVASCRIPT_RESOURCE_NAME,
        Resource::script(
            ResourceLocation::Embedded {
                key: assets::LAZYPANEL_JS.to_owned(),
            },
            &[
                VIEWHOST_RESOURCE_NAME,
                SPIN_RESOURCE_NAME,
                SPIN_CSS_RESOURCE_NAME,
            ],
        ),
    );
    config.resources.register(
        SPIN_RESOURCE_NAME,
        Resource::script(
            ResourceLocation::Embedded {
                key: assets::SPIN_JS.to_owned(),
            },
            &[],
        ),
    );
    config.resources.register(
        SPIN_CSS_RESOURCE_NAME,
        Resource::stylesheet(
            ResourceLocation::Embedded {
                key: assets::SPIN_CSS.to_owned(),
            },
            &[],
        ),
    );
}
