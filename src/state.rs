// Shared state structs to avoid circular dependencies.
// These are used by the registry and coordinator and can be tested independently.

use serde::{Deserialize, Serialize};

use crate::engine::EngineView;
use crate::landing;

/// Stable identifier for a tab. Indices shift when tabs close or reorder,
/// so engine events are routed by id, never by index. Ids are not reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub u64);

/// Per-tab load state. `Closed` is only reachable by removal from the
/// registry; the sole remaining tab is reset in place and stays `Loaded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Closed,
}

/// One open tab. Exclusively owned by the registry; dropping the tab drops
/// its engine view, which is the only teardown an engine gets.
pub struct Tab {
    pub id: TabId,
    pub engine: Box<dyn EngineView>,
    /// Title as last reported by the engine, untruncated.
    pub title: String,
    /// Address as last reported by the engine. Starts at the landing
    /// sentinel, which the address bar renders as an empty field.
    pub address: String,
    pub state: LoadState,
}

impl Tab {
    pub fn new(id: TabId, engine: Box<dyn EngineView>) -> Self {
        Tab {
            id,
            engine,
            title: String::new(),
            address: landing::landing_address(),
            state: LoadState::Loading,
        }
    }

    /// Label shown in the tab strip for this tab.
    pub fn label(&self) -> String {
        display_label(&self.title)
    }

    pub fn snapshot(&self, active: bool) -> TabSnapshot {
        TabSnapshot {
            id: self.id,
            label: self.label(),
            active,
        }
    }
}

/// Serializable projection of a tab for the shell's tab strip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: TabId,
    pub label: String,
    pub active: bool,
}

const MAX_LABEL_CHARS: usize = 12;

/// Tab label for a reported title: truncated to 12 characters with a ".."
/// marker when longer, "New Tab" when empty.
pub fn display_label(title: &str) -> String {
    if title.is_empty() {
        return "New Tab".to_string();
    }
    if title.chars().count() > MAX_LABEL_CHARS {
        let head: String = title.chars().take(MAX_LABEL_CHARS).collect();
        return format!("{}..", head);
    }
    title.to_string()
}
