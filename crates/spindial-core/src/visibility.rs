//! Whether the selector ring is currently shown and interactive.

use crate::scheduler::{FiredTimer, Scheduler, Timer, TimerId};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RingVisibility {
    #[default]
    Hidden,
    /// Hovered or held by a gesture.
    Shown,
    /// Still visible after hover/gesture end, waiting on the hide timer.
    Lingering,
}

#[derive(Debug)]
pub struct VisibilityState {
    state: RingVisibility,
    hide_timer: Option<TimerId>,
    hide_delay: Duration,
}

impl VisibilityState {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            state: RingVisibility::Hidden,
            hide_timer: None,
            hide_delay,
        }
    }

    pub fn state(&self) -> RingVisibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != RingVisibility::Hidden
    }

    pub fn show(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.state = RingVisibility::Shown;
    }

    /// Keep the ring up for the hide delay, then hide it.
    pub fn linger(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.state = RingVisibility::Lingering;
        self.hide_timer = Some(sched.schedule(self.hide_delay, Timer::RingHide));
    }

    /// Hide immediately and drop any pending hide timer.
    pub fn suppress(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.state = RingVisibility::Hidden;
    }

    pub fn on_timer(&mut self, fired: FiredTimer) {
        if self.hide_timer == Some(fired.id) {
            self.hide_timer = None;
            self.state = RingVisibility::Hidden;
        }
    }

    fn cancel_timer(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.hide_timer.take() {
            sched.cancel(id);
        }
    }
}
