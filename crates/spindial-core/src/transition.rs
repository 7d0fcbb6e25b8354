//! Crossfade transition between item sets.
//!
//! `Idle → Loading → FadingToBlack → Holding → FadingOut → Idle`, strictly
//! linear. The content swap happens on `Holding` entry while the overlay is
//! fully opaque. Every phase change after `Loading` is timer driven; phase N+1
//! is scheduled from phase N's due instant so the total crossfade length is
//! exact regardless of frame timing.

use crate::config::EngineConfig;
use crate::scheduler::{FiredTimer, Scheduler, Timer, TimerId};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Loading,
    FadingToBlack,
    Holding,
    FadingOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionDurations {
    pub fade_to_black: Duration,
    pub hold: Duration,
    pub fade_out: Duration,
    pub preload_timeout: Duration,
}

impl From<&EngineConfig> for TransitionDurations {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            fade_to_black: Duration::from_millis(cfg.fade_to_black_ms),
            hold: Duration::from_millis(cfg.hold_ms),
            fade_out: Duration::from_millis(cfg.fade_out_ms),
            preload_timeout: Duration::from_millis(cfg.preload_timeout_ms),
        }
    }
}

/// Handed to the host when a transition starts; the host preloads the set and
/// reports back with `token`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadTicket {
    pub token: u64,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The active set changed behind the blackout.
    Swapped(usize),
    Finished,
}

#[derive(Debug)]
pub struct TransitionStateMachine {
    phase: TransitionPhase,
    phase_entered_at: Duration,
    active: Option<usize>,
    highlighted: Option<usize>,
    pending: Option<usize>,
    token: u64,
    timer: Option<TimerId>,
    durations: TransitionDurations,
}

impl TransitionStateMachine {
    pub fn new(initial: Option<usize>, durations: TransitionDurations) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            phase_entered_at: Duration::ZERO,
            active: initial,
            highlighted: initial,
            pending: None,
            token: 0,
            timer: None,
            durations,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    pub fn phase_entered_at(&self) -> Duration {
        self.phase_entered_at
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Start a transition to `index`. No-op while a transition is in flight or
    /// when `index` is already active.
    pub fn request(&mut self, index: usize, sched: &mut Scheduler) -> Option<PreloadTicket> {
        if !self.is_idle() || self.active == Some(index) {
            return None;
        }
        self.token += 1;
        self.pending = Some(index);
        self.highlighted = Some(index);
        self.enter(TransitionPhase::Loading, sched.now());
        self.timer = Some(sched.schedule(self.durations.preload_timeout, Timer::TransitionPreloadTimeout));
        log::info!("[transition] loading set {} (token {})", index, self.token);
        Some(PreloadTicket {
            token: self.token,
            index,
        })
    }

    /// Preload finished (successfully or not). Stale tokens are ignored.
    pub fn preload_complete(&mut self, token: u64, sched: &mut Scheduler) -> bool {
        if self.phase != TransitionPhase::Loading || token != self.token {
            log::debug!("[transition] ignoring stale preload token {}", token);
            return false;
        }
        self.cancel_timer(sched);
        self.begin_fade(sched.now(), sched);
        true
    }

    pub fn on_timer(&mut self, fired: FiredTimer, sched: &mut Scheduler) -> Option<TransitionEvent> {
        if self.timer != Some(fired.id) {
            return None;
        }
        self.timer = None;
        match (self.phase, fired.timer) {
            (TransitionPhase::Loading, Timer::TransitionPreloadTimeout) => {
                log::warn!("[transition] preload timed out, continuing");
                self.begin_fade(fired.due, sched);
                None
            }
            (TransitionPhase::FadingToBlack, Timer::TransitionFadeToBlack) => {
                self.active = self.pending.take();
                self.enter(TransitionPhase::Holding, fired.due);
                self.timer = Some(sched.schedule_at(fired.due + self.durations.hold, Timer::TransitionHold));
                self.active.map(TransitionEvent::Swapped)
            }
            (TransitionPhase::Holding, Timer::TransitionHold) => {
                self.enter(TransitionPhase::FadingOut, fired.due);
                self.timer =
                    Some(sched.schedule_at(fired.due + self.durations.fade_out, Timer::TransitionFadeOut));
                None
            }
            (TransitionPhase::FadingOut, Timer::TransitionFadeOut) => {
                self.enter(TransitionPhase::Idle, fired.due);
                Some(TransitionEvent::Finished)
            }
            (phase, timer) => {
                log::warn!("[transition] unexpected {:?} in {:?}", timer, phase);
                None
            }
        }
    }

    /// Crossfade overlay opacity at `now`: rises over the fade-to-black, holds
    /// at 1, falls over the fade-out.
    pub fn overlay_opacity(&self, now: Duration) -> f32 {
        let progress = |len: Duration| {
            if len.is_zero() {
                1.0
            } else {
                (now.saturating_sub(self.phase_entered_at).as_secs_f64() / len.as_secs_f64())
                    .clamp(0.0, 1.0)
            }
        };
        match self.phase {
            TransitionPhase::Idle | TransitionPhase::Loading => 0.0,
            TransitionPhase::FadingToBlack => progress(self.durations.fade_to_black) as f32,
            TransitionPhase::Holding => 1.0,
            TransitionPhase::FadingOut => (1.0 - progress(self.durations.fade_out)) as f32,
        }
    }

    /// Teardown: cancel the armed timer and invalidate any outstanding preload.
    pub fn cancel(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.token += 1;
    }

    fn begin_fade(&mut self, at: Duration, sched: &mut Scheduler) {
        self.enter(TransitionPhase::FadingToBlack, at);
        self.timer = Some(sched.schedule_at(
            at + self.durations.fade_to_black,
            Timer::TransitionFadeToBlack,
        ));
    }

    fn enter(&mut self, phase: TransitionPhase, at: Duration) {
        log::debug!("[transition] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.phase_entered_at = at;
    }

    fn cancel_timer(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
    }
}
