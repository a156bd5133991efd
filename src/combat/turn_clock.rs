use crate::core::constants::ANSWER_WINDOW_SECONDS;

/// Countdown for one timed attack.
///
/// The presentation layer drives it with `tick` and forwards the player's
/// answer with `answer`. Whichever comes first produces the hit/miss signal
/// for `resolve_turn`; the other is ignored until `next_cycle` re-arms it.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnClock {
    window_seconds: f64,
    remaining_seconds: f64,
    settled: bool,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(ANSWER_WINDOW_SECONDS)
    }
}

impl TurnClock {
    pub fn new(window_seconds: f64) -> Self {
        Self {
            window_seconds,
            remaining_seconds: window_seconds,
            settled: false,
        }
    }

    pub fn remaining_seconds(&self) -> f64 {
        self.remaining_seconds
    }

    /// Whether this cycle has already produced its signal.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance time. Returns `Some(false)` once, when the window runs out.
    pub fn tick(&mut self, delta_seconds: f64) -> Option<bool> {
        if self.settled {
            return None;
        }
        self.remaining_seconds = (self.remaining_seconds - delta_seconds).max(0.0);
        if self.remaining_seconds <= 0.0 {
            self.settled = true;
            return Some(false);
        }
        None
    }

    /// Submit the player's answer, cancelling the countdown.
    pub fn answer(&mut self, correct: bool) -> Option<bool> {
        if self.settled {
            return None;
        }
        self.settled = true;
        Some(correct)
    }

    /// Re-arm for the next question.
    pub fn next_cycle(&mut self) {
        self.remaining_seconds = self.window_seconds;
        self.settled = false;
    }
}
