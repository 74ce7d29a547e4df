//! Countdown for the timed quiz attempt.

use std::time::{Duration, Instant};

/// Deadline-based countdown, polled from the UI tick.
///
/// The timer lives only while the quiz screen is active: entering the quiz
/// starts one, leaving the screen or completing the quiz through any path
/// drops it. Auto-submission fires at most once, so a manual submission that
/// races the deadline can never be doubled by the timeout path.
#[derive(Debug)]
pub struct QuizTimer {
    deadline: Instant,
    fired: bool,
}

impl QuizTimer {
    pub fn start(limit: Duration) -> Self {
        Self {
            deadline: Instant::now() + limit,
            fired: false,
        }
    }

    /// Time left until auto-submission, zero once the deadline has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// True exactly once, the first time the timer is polled after expiry.
    pub fn take_expiry(&mut self) -> bool {
        if self.fired {
            return false;
        }
        if self.remaining().is_zero() {
            self.fired = true;
            return true;
        }
        false
    }
}

/// `mm:ss` rendering of the remaining time.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_has_not_expired() {
        let mut timer = QuizTimer::start(Duration::from_secs(600));
        assert!(!timer.take_expiry());
        assert!(timer.remaining() > Duration::from_secs(590));
    }

    #[test]
    fn expiry_fires_exactly_once() {
        let mut timer = QuizTimer::start(Duration::ZERO);
        assert!(timer.take_expiry());
        assert!(!timer.take_expiry());
        assert!(!timer.take_expiry());
    }

    #[test]
    fn remaining_is_zero_after_deadline() {
        let timer = QuizTimer::start(Duration::ZERO);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(Duration::from_secs(600)), "10:00");
        assert_eq!(format_remaining(Duration::from_secs(61)), "01:01");
        assert_eq!(format_remaining(Duration::ZERO), "00:00");
    }
}
