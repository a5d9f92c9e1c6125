// Module exports for coordination logic
pub mod coordinator; // Intent/event translation and display state
pub mod navigation;  // Address resolution
pub mod tabs;        // Tab registry
