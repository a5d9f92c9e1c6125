// The engine seam. The embedding shell supplies a concrete engine (a
// webview); the coordination core only ever talks to these traits.

use std::sync::mpsc::Sender;

use crate::state::TabId;

/// Notifications an engine view emits while it loads and renders.
/// Delivery is asynchronous and carries no ordering guarantee across tabs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    AddressChanged(String),
    TitleChanged(String),
}

/// One embedded browser view: renders a single document, keeps its own
/// back/forward history, and reports address/title changes through the
/// channel handed to its factory at creation.
///
/// Navigation is fire-and-forget. A `load_address` while a load is in
/// flight supersedes it; back/forward with no history in that direction is
/// a no-op. Both are the engine's concern, not the coordinator's.
pub trait EngineView {
    fn load_address(&mut self, uri: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn current_address(&self) -> String;
    fn current_title(&self) -> String;
}

/// Builds one engine view per tab. The engine must tag every event with the
/// `tab` id it was created for, so the coordinator can still route events
/// after tab indices have shifted.
pub trait EngineFactory {
    fn create(&self, tab: TabId, events: Sender<(TabId, EngineEvent)>) -> Box<dyn EngineView>;
}
