// Slate Browser Coordination Core
// Tab registry and navigation coordinator for a minimal tabbed shell.
// The embedding shell supplies the engine views (webviews) and renders the
// derived display state; everything here is toolkit-free and unit testable.

// External seams
pub mod engine;

// Core modules
pub mod landing;
pub mod settings;

// Shared state
pub mod state;

// Coordination logic (no toolkit imports)
pub mod modules;

pub use engine::{EngineEvent, EngineFactory, EngineView};
pub use modules::coordinator::{NavigationCoordinator, UiShell};
pub use modules::tabs::TabRegistry;
pub use settings::{SearchEngine, Settings};
pub use state::{LoadState, Tab, TabId, TabSnapshot};
