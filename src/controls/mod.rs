//! Server-rendered controls.

pub mod loadable_panel;

pub use loadable_panel::LoadablePanel;
