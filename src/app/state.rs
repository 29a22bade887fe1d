use crate::zones::Zone;
use std::time::{Duration, Instant};

pub const FEEDBACK_DURATION: Duration = Duration::from_secs(1);

/// Cosmetic per-zone drop feedback. A flash never blocks new drops; a new
/// drop simply restarts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Idle,
    Flash { error: bool, since: Instant },
}

impl Feedback {
    pub fn success(now: Instant) -> Self {
        Feedback::Flash { error: false, since: now }
    }

    pub fn error(now: Instant) -> Self {
        Feedback::Flash { error: true, since: now }
    }

    /// Advance the state machine; returns true while a flash is still live.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Feedback::Flash { since, .. } = *self {
            if now.duration_since(since) >= FEEDBACK_DURATION {
                *self = Feedback::Idle;
                return false;
            }
            return true;
        }
        false
    }
}

pub struct ZoneState {
    pub zone: Zone,
    pub feedback: Feedback,
}

impl ZoneState {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            feedback: Feedback::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_resets_to_idle_after_duration() {
        let start = Instant::now();
        let mut feedback = Feedback::success(start);

        assert!(feedback.tick(start));
        assert!(feedback.tick(start + Duration::from_millis(500)));
        assert!(!feedback.tick(start + Duration::from_secs(2)));
        assert_eq!(feedback, Feedback::Idle);
    }

    #[test]
    fn new_drop_replaces_running_flash() {
        let start = Instant::now();
        let mut feedback = Feedback::error(start);
        assert!(feedback.tick(start));

        feedback = Feedback::success(start + Duration::from_millis(300));
        assert!(feedback.tick(start + Duration::from_millis(400)));
        assert!(matches!(feedback, Feedback::Flash { error: false, .. }));
    }

    #[test]
    fn idle_stays_idle() {
        let mut feedback = Feedback::Idle;
        assert!(!feedback.tick(Instant::now()));
        assert_eq!(feedback, Feedback::Idle);
    }
}
