// Tab registry - ordered tabs, one engine view each, exactly one active.
// Pure coordination logic over the engine seam; no toolkit imports.

use std::collections::HashMap;
use std::sync::mpsc::Sender;

use log::{debug, info};

use crate::engine::{EngineEvent, EngineFactory};
use crate::landing;
use crate::state::{LoadState, Tab, TabId};

/// Ordered collection of open tabs. Invariants: never empty once
/// constructed, and the active index is always in bounds.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: usize,
    next_id: u64,
    factory: Box<dyn EngineFactory>,
    events: Sender<(TabId, EngineEvent)>,
}

impl TabRegistry {
    /// Builds the registry with its first tab already open on the landing
    /// page and active.
    pub fn new(factory: Box<dyn EngineFactory>, events: Sender<(TabId, EngineEvent)>) -> Self {
        let mut registry = TabRegistry {
            tabs: Vec::new(),
            active: 0,
            next_id: 0,
            factory,
            events,
        };
        registry.add_tab();
        registry
    }

    /// Opens a fresh tab on the landing page, appends it, makes it active.
    /// Growth is unbounded.
    pub fn add_tab(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;

        let mut engine = self.factory.create(id, self.events.clone());
        engine.load_address(&landing::landing_address());

        self.tabs.push(Tab::new(id, engine));
        self.active = self.tabs.len() - 1;

        info!("opened tab {:?} ({} open)", id, self.tabs.len());
        id
    }

    /// Closes the tab at `index`. Out-of-range is a no-op.
    ///
    /// The last remaining tab is never removed: it is reset to the landing
    /// page in place, so the registry never goes empty. When the active tab
    /// closes, its left neighbor becomes active (closing index 0 leaves the
    /// old right neighbor active at index 0).
    pub fn close_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }

        if self.tabs.len() == 1 {
            let tab = &mut self.tabs[0];
            let home = landing::landing_address();
            tab.engine.load_address(&home);
            tab.address = home;
            tab.title.clear();
            tab.state = LoadState::Loaded;
            info!("reset sole tab {:?} to the landing page", tab.id);
            return;
        }

        let mut tab = self.tabs.remove(index);
        // Removal is the only path into Closed. Nothing reads the tab after
        // this; the write realizes the lifecycle, then the engine view is
        // torn down with the tab, synchronously.
        tab.state = LoadState::Closed;
        info!("closed tab {:?} ({} open)", tab.id, self.tabs.len());
        drop(tab);

        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = index.saturating_sub(1);
        }
    }

    /// Makes the tab at `index` active. Out-of-range is a silent no-op.
    pub fn activate(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    pub fn current(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn current_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    /// Index of the tab with `id`, if it is still open.
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Reorders tabs to match `new_order` (drag-reorder from the shell).
    /// Returns true if the order changed.
    ///
    /// Algorithm:
    /// 1. Map existing tabs by id for O(1) lookup
    /// 2. Rebuild the vector based on new_order
    /// 3. Append any missing tabs in their old relative order (safety -
    ///    prevents data loss when the gesture raced a close or add)
    ///
    /// The active tab stays active; only its index is recomputed.
    pub fn reorder(&mut self, new_order: &[TabId]) -> bool {
        // Quick check: if either side is empty, no-op
        if self.tabs.is_empty() || new_order.is_empty() {
            return false;
        }

        let active_id = self.tabs[self.active].id;
        let old_order: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();

        // Map existing tabs by id
        let mut by_id: HashMap<TabId, Tab> = self.tabs.drain(..).map(|t| (t.id, t)).collect();

        // Rebuild based on new_order
        let mut reordered = Vec::new();
        for id in new_order {
            if let Some(tab) = by_id.remove(id) {
                reordered.push(tab);
            }
        }

        // Safety: Append any tabs that weren't in new_order, keeping their
        // old relative order (prevents data loss)
        for id in &old_order {
            if let Some(tab) = by_id.remove(id) {
                reordered.push(tab);
            }
        }

        let new_order_actual: Vec<TabId> = reordered.iter().map(|t| t.id).collect();
        let changed = old_order != new_order_actual;

        self.tabs = reordered;
        // active_id is still present: reorder never drops tabs.
        self.active = self.position(active_id).unwrap_or(0);

        debug!("reorder: {:?} -> {:?} (changed: {})", old_order, new_order_actual, changed);
        changed
    }
}
