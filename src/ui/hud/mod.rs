// src/ui/hud/mod.rs
//
// Character HUD: stat readouts, action buttons and the pause overlay.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
