//! Server-rendered loadable panel control and client asset registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent components live here: a resource registrar that declares
//! script/stylesheet assets with load-order dependencies, and a loadable
//! panel control that defers rendering its content until a client-triggered
//! server command completes. The surrounding modules provide the minimal
//! view-host surface both are built against: an element tree and streaming
//! writer, content templates, knockout-style binding descriptors, and a
//! request-scoped resource manager.
//!
//! Rendering is synchronous and request-scoped. A control instance serves
//! one request and is discarded with the response; nothing is shared across
//! concurrent requests.

pub mod assets;
pub mod binding;
pub mod config;
pub mod context;
pub mod controls;
pub mod html;
pub mod resources;
pub mod template;

pub use binding::{BindingGroup, CommandBinding, ValueBinding};
pub use config::{HostConfiguration, add_loadable_panel_configuration};
pub use context::{Control, RequestContext, render_to_string};
pub use controls::LoadablePanel;
pub use html::{HtmlElement, HtmlWriter, Node};
pub use resources::{Resource, ResourceLocation, ResourceRegistry};
pub use template::Template;
