//! Resources and messages owned by the input driver.
use bevy::prelude::*;

/// Registration state of the input listener.
///
/// While disabled the driver's systems do not run, so no movement or action
/// commands reach the character.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ControlsState {
    enabled: bool,
}

impl ControlsState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn register(&mut self) {
        self.enabled = true;
    }

    pub fn teardown(&mut self) {
        self.enabled = false;
    }
}

impl Default for ControlsState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Request to pause or resume the simulation.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseRequest {
    Pause,
    Resume,
    Toggle,
}

impl PauseRequest {
    /// Pause state after applying this request to `paused`.
    pub fn resolve(self, paused: bool) -> bool {
        match self {
            Self::Pause => true,
            Self::Resume => false,
            Self::Toggle => !paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_requests_resolve_against_current_state() {
        assert!(PauseRequest::Pause.resolve(false));
        assert!(PauseRequest::Pause.resolve(true));
        assert!(!PauseRequest::Resume.resolve(true));
        assert!(PauseRequest::Toggle.resolve(false));
        assert!(!PauseRequest::Toggle.resolve(true));
    }

    #[test]
    fn controls_start_registered() {
        let mut controls = ControlsState::default();
        assert!(controls.is_enabled());
        controls.teardown();
        assert!(!controls.is_enabled());
        controls.register();
        assert!(controls.is_enabled());
    }
}
