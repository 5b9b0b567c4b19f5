//! Rejection reasons for character action requests.
use std::fmt;

use super::state::Activity;

/// Action a caller asked the character to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedAction {
    Eat,
    Sleep,
    Dance,
}

impl fmt::Display for RequestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Eat => "eat",
            Self::Sleep => "sleep",
            Self::Dance => "dance",
        };
        write!(f, "{}", label)
    }
}

/// Returned when a request arrives while the character is not idle.
///
/// The character state is never modified by a rejected request; callers are
/// expected to log and drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRejected {
    pub requested: RequestedAction,
    pub current: Activity,
}

impl ActivityRejected {
    pub fn new(requested: RequestedAction, current: Activity) -> Self {
        Self { requested, current }
    }
}

impl fmt::Display for ActivityRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot {} while {}",
            self.requested,
            self.current.label()
        )
    }
}

impl std::error::Error for ActivityRejected {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_names_both_activities() {
        let error = ActivityRejected::new(RequestedAction::Eat, Activity::Sleeping);
        assert_eq!(error.to_string(), "cannot eat while sleeping");

        let error = ActivityRejected::new(RequestedAction::Dance, Activity::Dead);
        assert_eq!(error.to_string(), "cannot dance while dead");
    }
}
