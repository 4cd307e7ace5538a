//! Named client resources, dependency-ordered emission, and the per-request
//! resource manager.
//!
//! DESIGN
//! ======
//! The registry is application-scoped and written once at startup; the
//! manager is request-scoped and records which resources a rendered page
//! needs. Load order is a depth-first walk over declared dependencies, so
//! every dependency is emitted strictly before its dependents. Output is
//! deterministic given the request order and each resource's declared
//! dependency order.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::assets;
use crate::html::escape_attribute;

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;

/// Error produced while resolving resource load order.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// A required resource (or one of its dependencies) is not registered.
    #[error("unknown resource: {0}")]
    Unknown(String),
    /// Dependency edges form a cycle through the named resource.
    #[error("resource dependency cycle through: {0}")]
    DependencyCycle(String),
}

/// Kind of client asset a resource emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Script,
    Stylesheet,
}

/// Where a resource's payload lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLocation {
    /// Compile-time embedded asset, served under [`assets::ASSET_ROUTE`].
    Embedded { key: String },
    /// External URL, emitted as-is.
    Url { url: String },
}

impl ResourceLocation {
    /// URL the emitted tag points at.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Embedded { key } => format!("{}/{key}", assets::ASSET_ROUTE),
            Self::Url { url } => url.clone(),
        }
    }
}

/// A named, dependency-ordered client asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub location: ResourceLocation,
    /// Names of resources that must be emitted before this one.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Resource {
    #[must_use]
    pub fn script(location: ResourceLocation, dependencies: &[&str]) -> Self {
        Self {
            kind: ResourceKind::Script,
            location,
            dependencies: dependencies.iter().map(|d| (*d).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn stylesheet(location: ResourceLocation, dependencies: &[&str]) -> Self {
        Self {
            kind: ResourceKind::Stylesheet,
            location,
            dependencies: dependencies.iter().map(|d| (*d).to_owned()).collect(),
        }
    }
}

/// Application-scoped registry of named resources.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResourceRegistry {
    resources: HashMap<String, Resource>,
    /// Names in first-registration order.
    order: Vec<String>,
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resource` under `name`, replacing any previous entry under
    /// the same name. Replacement is logged and the previous entry returned;
    /// entries are never duplicated.
    pub fn register(&mut self, name: impl Into<String>, resource: Resource) -> Option<Resource> {
        let name = name.into();
        let replaced = self.resources.insert(name.clone(), resource);
        if replaced.is_some() {
            tracing::warn!(resource = %name, "overwriting existing resource registration");
        } else {
            self.order.push(name);
        }
        replaced
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Registered names in first-registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Expand `roots` with their transitive dependencies and order the result
    /// so every dependency precedes its dependents.
    ///
    /// # Errors
    ///
    /// `Unknown` if a root or dependency is unregistered; `DependencyCycle`
    /// if dependency edges loop.
    pub fn resolve_load_order(&self, roots: &[String]) -> Result<Vec<String>, ResourceError> {
        let mut resolved: Vec<String> = Vec::new();
        let mut visiting: Vec<String> = Vec::new();
        for root in roots {
            self.visit(root, &mut resolved, &mut visiting)?;
        }
        tracing::debug!(count = resolved.len(), "resolved resource load order");
        Ok(resolved)
    }

    fn visit(
        &self,
        name: &str,
        resolved: &mut Vec<String>,
        visiting: &mut Vec<String>,
    ) -> Result<(), ResourceError> {
        if resolved.iter().any(|r| r == name) {
            return Ok(());
        }
        if visiting.iter().any(|v| v == name) {
            return Err(ResourceError::DependencyCycle(name.to_owned()));
        }
        let resource = self
            .resources
            .get(name)
            .ok_or_else(|| ResourceError::Unknown(name.to_owned()))?;
        visiting.push(name.to_owned());
        for dep in &resource.dependencies {
            self.visit(dep, resolved, visiting)?;
        }
        visiting.pop();
        resolved.push(name.to_owned());
        Ok(())
    }
}

/// Request-scoped set of resources the rendered page needs.
#[derive(Debug, Default)]
pub struct ResourceManager {
    required: Vec<String>,
}

impl ResourceManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the rendered page needs `name`. Duplicate requests keep
    /// the first position.
    pub fn add_required_resource(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.required.iter().any(|r| r == &name) {
            self.required.push(name);
        }
    }

    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Emit `<link>`/`<script>` tags for all required resources in resolved
    /// load order.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from load-order resolution.
    pub fn render_tags(&self, registry: &ResourceRegistry) -> Result<String, ResourceError> {
        let order = registry.resolve_load_order(&self.required)?;
        let mut out = String::new();
        for name in &order {
            // Resolution only returns registered names.
            let Some(resource) = registry.get(name) else {
                continue;
            };
            let href = escape_attribute(&resource.location.href());
            match resource.kind {
                ResourceKind::Stylesheet => {
                    let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{href}\">");
                }
                ResourceKind::Script => {
                    let _ = writeln!(out, "<script src=\"{href}\"></script>");
                }
            }
        }
        Ok(out)
    }
}
