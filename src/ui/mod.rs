// src/ui/mod.rs
//
// UI module providing screen-space elements on top of the room.
//
// Current features:
// - Character HUD (hunger/sleepiness readouts, status line)
// - Action bar (eat, sleep, dance, pause) and pause overlay

pub mod hud;

// Re-export the main plugin
pub use hud::UiPlugin;
