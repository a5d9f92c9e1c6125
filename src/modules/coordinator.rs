// Navigation coordinator - translates shell intents into engine commands
// and engine events into derived display state (address bar text, tab
// labels). Everything runs on the shell's UI thread; engine events arrive
// through an mpsc channel and are drained with `pump_events`.

use std::sync::mpsc::{self, Receiver};

use log::debug;

use crate::engine::{EngineEvent, EngineFactory};
use crate::landing;
use crate::modules::navigation;
use crate::modules::tabs::TabRegistry;
use crate::settings::Settings;
use crate::state::{LoadState, TabId, TabSnapshot};

/// Display surface the shell renders. The coordinator pushes derived state
/// through this interface and never reads the widgets back.
pub trait UiShell {
    fn set_address_text(&mut self, text: &str);
    fn set_tab_label(&mut self, index: usize, label: &str);
    fn sync_tabs(&mut self, tabs: &[TabSnapshot]);
}

/// Owns the tab registry and the engine event channel. The shell owns the
/// coordinator; the coordinator owns the registry; the registry owns tabs;
/// tabs own engine views. No globals.
pub struct NavigationCoordinator {
    registry: TabRegistry,
    settings: Settings,
    events: Receiver<(TabId, EngineEvent)>,
}

impl NavigationCoordinator {
    /// Builds the coordinator with one tab already open on the landing page.
    pub fn new(factory: Box<dyn EngineFactory>, settings: Settings) -> Self {
        let (tx, rx) = mpsc::channel();
        NavigationCoordinator {
            registry: TabRegistry::new(factory, tx),
            settings,
            events: rx,
        }
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // --- Commands (always against the active tab's engine) ---

    /// Resolves raw address-bar input and loads it in the active tab.
    /// Malformed input is passed through; the engine shows its own error
    /// page if the load fails.
    pub fn navigate(&mut self, text: &str) {
        let destination = navigation::resolve_destination(text, &self.settings);
        debug!("navigate: {:?} -> {}", text, destination);

        let tab = self.registry.current_mut();
        tab.engine.load_address(&destination);
        tab.state = LoadState::Loading;
    }

    pub fn go_back(&mut self) {
        self.registry.current_mut().engine.back();
    }

    pub fn go_forward(&mut self) {
        self.registry.current_mut().engine.forward();
    }

    pub fn reload(&mut self) {
        self.registry.current_mut().engine.reload();
    }

    // --- Tab commands ---

    pub fn add_tab(&mut self, ui: &mut dyn UiShell) -> TabId {
        let id = self.registry.add_tab();
        self.refresh_address_bar(ui);
        self.sync_tab_strip(ui);
        id
    }

    pub fn close_tab(&mut self, index: usize, ui: &mut dyn UiShell) {
        self.registry.close_tab(index);
        self.refresh_address_bar(ui);
        self.sync_tab_strip(ui);
    }

    /// Activates the tab at `index`, refreshes the address bar to its last
    /// known address, and pushes a strip snapshot so the highlight moves.
    /// `index` comes straight from the tab strip, which reports -1 while no
    /// tab is selected; that sentinel is ignored.
    pub fn switch_tab(&mut self, index: i32, ui: &mut dyn UiShell) {
        if index < 0 {
            return;
        }
        self.registry.activate(index as usize);
        self.refresh_address_bar(ui);
        self.sync_tab_strip(ui);
    }

    pub fn reorder_tabs(&mut self, new_order: &[TabId], ui: &mut dyn UiShell) {
        if self.registry.reorder(new_order) {
            self.sync_tab_strip(ui);
        }
    }

    // --- Engine events ---

    /// Drains pending engine events. Call once per shell event-loop turn;
    /// never blocks. Events for tabs closed in the meantime are dropped.
    pub fn pump_events(&mut self, ui: &mut dyn UiShell) {
        while let Ok((id, event)) = self.events.try_recv() {
            self.handle_engine_event(id, event, ui);
        }
    }

    fn handle_engine_event(&mut self, id: TabId, event: EngineEvent, ui: &mut dyn UiShell) {
        let Some(index) = self.registry.position(id) else {
            debug!("dropping {:?} for closed tab {:?}", event, id);
            return;
        };

        match event {
            EngineEvent::AddressChanged(address) => {
                if let Some(tab) = self.registry.get_mut(index) {
                    tab.address = address;
                    if tab.state == LoadState::Loading {
                        tab.state = LoadState::Loaded;
                    }
                }
                // Background tabs keep the address for later; only the
                // active tab drives the bar.
                if index == self.registry.active_index() {
                    self.refresh_address_bar(ui);
                }
            }
            EngineEvent::TitleChanged(title) => {
                let label = match self.registry.get_mut(index) {
                    Some(tab) => {
                        tab.title = title;
                        if tab.state == LoadState::Loading {
                            tab.state = LoadState::Loaded;
                        }
                        tab.label()
                    }
                    None => return,
                };
                // Labels update for background tabs too.
                ui.set_tab_label(index, &label);
            }
        }
    }

    // --- Derived display state ---

    fn refresh_address_bar(&self, ui: &mut dyn UiShell) {
        ui.set_address_text(&display_address(&self.registry.current().address));
    }

    fn sync_tab_strip(&self, ui: &mut dyn UiShell) {
        let active = self.registry.active_index();
        let snapshot: Vec<TabSnapshot> = self
            .registry
            .iter()
            .enumerate()
            .map(|(i, tab)| tab.snapshot(i == active))
            .collect();
        ui.sync_tabs(&snapshot);
    }
}

/// Address bar text for a tab address: the landing sentinel renders as an
/// empty field, anything else verbatim.
pub fn display_address(address: &str) -> String {
    if landing::is_landing_address(address) {
        String::new()
    } else {
        address.to_string()
    }
}
