//! Explicit timer queue and fixed-rate frame clock.
//!
//! Session time only moves when the host calls `advance`, so every delay in the
//! engine is deterministic under test. Timers are cancelable by id; an owner
//! that leaves a phase early cancels the timer it armed.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    TransitionPreloadTimeout,
    TransitionFadeToBlack,
    TransitionHold,
    TransitionFadeOut,
    RingHide,
    WheelSettle,
    OnboardingMinLoading,
    OnboardingActionReady,
    OnboardingFadeOut,
    OnboardingFadeIn,
    OnboardingWorkingFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub timer: Timer,
    pub due: Duration,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<FiredTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerId {
        self.schedule_at(self.now + delay, timer)
    }

    pub fn schedule_at(&mut self, due: Duration, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(FiredTimer { id, timer, due });
        id
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Remove and return the earliest timer due at or before `now`. Ties fire in
    /// scheduling order.
    pub fn pop_due(&mut self) -> Option<FiredTimer> {
        let now = self.now;
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by(|(_, a), (_, b)| a.due.cmp(&b.due).then(a.id.0.cmp(&b.id.0)))?;
        Some(self.pending.remove(pos))
    }
}

/// Converts variable host frame times into a whole number of fixed steps.
#[derive(Debug)]
pub struct FrameClock {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
}

impl FrameClock {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            max_steps: max_steps.max(1),
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of fixed steps to run for a host frame of length `dt`.
    pub fn accumulate(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            log::debug!(
                "[clock] dropping {:.1} ms of backlog",
                self.accumulator.as_secs_f64() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }
        steps
    }
}
