//! Two-stage intro that gates entry into the experience.
//!
//! Stage one explains tilting, stage two explains rotating; each stage's
//! action unlocks after a fixed delay. Entering (stage two's action) also
//! requires loading to be finished: a minimum loading time has passed, the
//! renderer has its first frame and the audio engine reports ready. While any
//! of those is outstanding a working indicator cycles.

use crate::config::EngineConfig;
use crate::constants::WORKING_FRAMES;
use crate::scheduler::{FiredTimer, Scheduler, Timer, TimerId};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnboardingStage {
    #[default]
    Tilt,
    Rotate,
    Entered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StageFade {
    #[default]
    None,
    Out,
    In,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingView {
    pub stage: OnboardingStage,
    pub fade: StageFade,
    pub action_ready: bool,
    pub loading: bool,
    pub renderer_ready: bool,
    pub assets_ready: bool,
    pub indicator: &'static str,
}

#[derive(Debug)]
pub struct OnboardingSequencer {
    stage: OnboardingStage,
    fade: StageFade,
    action_ready: bool,
    min_loading_elapsed: bool,
    renderer_ready: bool,
    assets_ready: bool,
    working_frame: usize,
    action_timer: Option<TimerId>,
    fade_timer: Option<TimerId>,
    min_loading_timer: Option<TimerId>,
    working_timer: Option<TimerId>,
    min_loading: Duration,
    action_delay: Duration,
    fade_duration: Duration,
    working_frame_interval: Duration,
}

impl OnboardingSequencer {
    pub fn new(cfg: &EngineConfig) -> Self {
        Self {
            stage: OnboardingStage::Tilt,
            fade: StageFade::None,
            action_ready: false,
            min_loading_elapsed: false,
            renderer_ready: false,
            assets_ready: false,
            working_frame: 0,
            action_timer: None,
            fade_timer: None,
            min_loading_timer: None,
            working_timer: None,
            min_loading: Duration::from_millis(cfg.min_loading_ms),
            action_delay: Duration::from_millis(cfg.stage_action_delay_ms),
            fade_duration: Duration::from_millis(cfg.stage_fade_ms),
            working_frame_interval: Duration::from_millis(cfg.working_frame_ms),
        }
    }

    /// Arm the stage-one and loading timers.
    pub fn begin(&mut self, sched: &mut Scheduler) {
        self.min_loading_timer = Some(sched.schedule(self.min_loading, Timer::OnboardingMinLoading));
        self.action_timer = Some(sched.schedule(self.action_delay, Timer::OnboardingActionReady));
        self.working_timer =
            Some(sched.schedule(self.working_frame_interval, Timer::OnboardingWorkingFrame));
    }

    pub fn stage(&self) -> OnboardingStage {
        self.stage
    }

    pub fn is_loading(&self) -> bool {
        !(self.min_loading_elapsed && self.renderer_ready && self.assets_ready)
    }

    pub fn set_renderer_ready(&mut self, sched: &mut Scheduler) {
        self.renderer_ready = true;
        self.refresh_loading(sched);
    }

    pub fn set_assets_ready(&mut self, sched: &mut Scheduler) {
        self.assets_ready = true;
        self.refresh_loading(sched);
    }

    pub fn can_continue(&self) -> bool {
        self.stage == OnboardingStage::Tilt && self.fade == StageFade::None && self.action_ready
    }

    pub fn can_enter(&self) -> bool {
        self.stage == OnboardingStage::Rotate
            && self.fade == StageFade::None
            && self.action_ready
            && !self.is_loading()
    }

    /// Stage-one action: fade out, swap to stage two, fade in.
    pub fn advance(&mut self, sched: &mut Scheduler) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.action_ready = false;
        self.fade = StageFade::Out;
        self.fade_timer = Some(sched.schedule(self.fade_duration, Timer::OnboardingFadeOut));
        log::info!("[onboarding] continue");
        true
    }

    /// Stage-two action. The caller starts audio in the same call stack.
    pub fn complete(&mut self, sched: &mut Scheduler) -> bool {
        if !self.can_enter() {
            return false;
        }
        self.stage = OnboardingStage::Entered;
        self.action_ready = false;
        for id in [
            self.action_timer.take(),
            self.fade_timer.take(),
            self.min_loading_timer.take(),
            self.working_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            sched.cancel(id);
        }
        log::info!("[onboarding] entered");
        true
    }

    pub fn on_timer(&mut self, fired: FiredTimer, sched: &mut Scheduler) {
        match fired.timer {
            Timer::OnboardingMinLoading if self.min_loading_timer == Some(fired.id) => {
                self.min_loading_timer = None;
                self.min_loading_elapsed = true;
                self.refresh_loading(sched);
            }
            Timer::OnboardingActionReady if self.action_timer == Some(fired.id) => {
                self.action_timer = None;
                self.action_ready = true;
            }
            Timer::OnboardingFadeOut if self.fade_timer == Some(fired.id) => {
                self.stage = OnboardingStage::Rotate;
                self.fade = StageFade::In;
                self.fade_timer =
                    Some(sched.schedule_at(fired.due + self.fade_duration, Timer::OnboardingFadeIn));
            }
            Timer::OnboardingFadeIn if self.fade_timer == Some(fired.id) => {
                self.fade_timer = None;
                self.fade = StageFade::None;
                self.action_timer = Some(sched.schedule(self.action_delay, Timer::OnboardingActionReady));
            }
            Timer::OnboardingWorkingFrame if self.working_timer == Some(fired.id) => {
                self.working_frame = (self.working_frame + 1) % WORKING_FRAMES.len();
                self.working_timer = self.is_loading().then(|| {
                    sched.schedule_at(
                        fired.due + self.working_frame_interval,
                        Timer::OnboardingWorkingFrame,
                    )
                });
            }
            _ => {}
        }
    }

    pub fn view(&self) -> OnboardingView {
        OnboardingView {
            stage: self.stage,
            fade: self.fade,
            action_ready: self.action_ready,
            loading: self.is_loading(),
            renderer_ready: self.renderer_ready,
            assets_ready: self.assets_ready,
            indicator: if self.is_loading() {
                WORKING_FRAMES[self.working_frame]
            } else {
                ""
            },
        }
    }

    fn refresh_loading(&mut self, sched: &mut Scheduler) {
        if self.is_loading() {
            return;
        }
        if let Some(id) = self.working_timer.take() {
            sched.cancel(id);
            log::info!("[onboarding] loading finished");
        }
    }
}
