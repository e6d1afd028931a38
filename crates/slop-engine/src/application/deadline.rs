//! The manual-breathing deadline.
//!
//! A countdown over wall-clock time that must be reset by player action
//! or the session ends. The struct is a pure state machine; arming and
//! resuming yield an [`ArmEffect`] the engine turns into a `sleep_until`
//! task posting an expiry message tagged with the arming generation, so
//! a stale expiry from a superseded arm is discarded on receipt.

use std::time::Duration;

use tokio::time::Instant;

/// Effect returned when the countdown (re)starts: spawn a task that
/// sleeps until `deadline` and posts an expiry carrying `generation`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArmEffect {
    pub generation: u64,
    pub deadline: Instant,
}

#[derive(Debug, Clone, Copy)]
enum TimerState {
    Disarmed,
    Armed { deadline: Instant },
    Suspended { remaining: Duration },
}

/// The countdown. Exactly one expiry fires per armed period; suspension
/// freezes the remaining time rather than resetting it.
#[derive(Debug)]
pub(crate) struct DeadlineTimer {
    duration: Duration,
    generation: u64,
    state: TimerState,
}

impl DeadlineTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            state: TimerState::Disarmed,
        }
    }

    fn rearm(&mut self, deadline: Instant) -> ArmEffect {
        self.generation += 1;
        self.state = TimerState::Armed { deadline };
        ArmEffect {
            generation: self.generation,
            deadline,
        }
    }

    /// Starts the countdown from the full duration. No-op unless
    /// disarmed.
    pub fn arm(&mut self, now: Instant) -> Option<ArmEffect> {
        match self.state {
            TimerState::Disarmed => Some(self.rearm(now + self.duration)),
            TimerState::Armed { .. } | TimerState::Suspended { .. } => None,
        }
    }

    /// The player breathed: restart the countdown from the full
    /// duration. Ignored while suspended or disarmed.
    pub fn reset(&mut self, now: Instant) -> Option<ArmEffect> {
        match self.state {
            TimerState::Armed { .. } => Some(self.rearm(now + self.duration)),
            TimerState::Disarmed | TimerState::Suspended { .. } => None,
        }
    }

    /// Freezes the remaining time. No-op unless armed.
    pub fn suspend(&mut self, now: Instant) {
        if let TimerState::Armed { deadline } = self.state {
            self.generation += 1;
            self.state = TimerState::Suspended {
                remaining: deadline.saturating_duration_since(now),
            };
        }
    }

    /// Continues the countdown from the frozen remainder, never a
    /// silent reset to the full duration. No-op unless suspended.
    pub fn resume(&mut self, now: Instant) -> Option<ArmEffect> {
        match self.state {
            TimerState::Suspended { remaining } => Some(self.rearm(now + remaining)),
            TimerState::Disarmed | TimerState::Armed { .. } => None,
        }
    }

    /// Stops the countdown entirely.
    pub fn disarm(&mut self) {
        self.generation += 1;
        self.state = TimerState::Disarmed;
    }

    /// Validates an expiry message. Returns true exactly once per armed
    /// period: when the generation matches, the timer is still armed,
    /// and the deadline has passed. Disarms on acceptance so the timer
    /// never re-fires without an explicit re-arm.
    pub fn acknowledge_expiry(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.state {
            TimerState::Armed { deadline } if now >= deadline => {
                self.disarm();
                true
            }
            _ => false,
        }
    }

    /// Remaining active time, for display. The full duration when
    /// disarmed.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.state {
            TimerState::Disarmed => self.duration,
            TimerState::Armed { deadline } => deadline.saturating_duration_since(now),
            TimerState::Suspended { remaining } => remaining,
        }
    }

    pub fn is_disarmed(&self) -> bool {
        matches!(self.state, TimerState::Disarmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_then_expiry_fires_exactly_once() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();

        let effect = timer.arm(now).unwrap();
        assert_eq!(effect.deadline, now + ms(8000));

        // Early expiry is rejected, on-time expiry accepted once.
        assert!(!timer.acknowledge_expiry(effect.generation, now + ms(7999)));
        assert!(timer.acknowledge_expiry(effect.generation, now + ms(8000)));
        assert!(!timer.acknowledge_expiry(effect.generation, now + ms(8001)));
        assert!(timer.is_disarmed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_the_full_countdown() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();
        let first = timer.arm(now).unwrap();

        let second = timer.reset(now + ms(5000)).unwrap();

        assert_eq!(second.deadline, now + ms(13000));
        // The superseded arm can no longer fire.
        assert!(!timer.acknowledge_expiry(first.generation, now + ms(8000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_suspend_freezes_and_resume_continues_remaining() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();
        let first = timer.arm(now).unwrap();

        timer.suspend(now + ms(3000));
        assert_eq!(timer.remaining(now + ms(60000)), ms(5000));
        // The suspended period produces no expiry, however long it lasts.
        assert!(!timer.acknowledge_expiry(first.generation, now + ms(60000)));

        let resumed = timer.resume(now + ms(60000)).unwrap();
        // 8000ms of *active* time total: 3000 before the suspension
        // plus 5000 after, not a reset to the full duration.
        assert_eq!(resumed.deadline, now + ms(65000));
        assert!(timer.acknowledge_expiry(resumed.generation, now + ms(65000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_is_ignored_while_suspended() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();
        timer.arm(now);
        timer.suspend(now + ms(2000));

        assert!(timer.reset(now + ms(3000)).is_none());
        assert_eq!(timer.remaining(now + ms(3000)), ms(6000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_never_fires() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();
        let first = timer.arm(now).unwrap();
        timer.disarm();
        timer.arm(now + ms(100));

        assert!(!timer.acknowledge_expiry(first.generation, now + ms(8000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_is_noop_while_armed_or_suspended() {
        let mut timer = DeadlineTimer::new(ms(8000));
        let now = Instant::now();
        timer.arm(now);

        assert!(timer.arm(now + ms(1000)).is_none());
        timer.suspend(now + ms(1000));
        assert!(timer.arm(now + ms(2000)).is_none());
    }
}
