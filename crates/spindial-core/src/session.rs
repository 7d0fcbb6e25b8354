//! The interaction engine for one page session.
//!
//! `Session` is the single owner of every piece of engine state. Hosts feed it
//! input and elapsed time, then drain the queued [`Effect`]s and read a
//! [`ViewState`] snapshot for presentation. Time advances in fixed steps; each
//! step fires due timers, eases the ring, emits ticks and checks whether a
//! finished gesture should start a transition.

use crate::audio::{AudioAsset, AudioBackend, AudioEngine};
use crate::config::EngineConfig;
use crate::constants::{MAX_AUDIBLE_TICKS_PER_STEP, WHEEL_MAX_DELTA_PX};
use crate::error::AudioError;
use crate::gesture::{GestureClassifier, GestureOutcome};
use crate::items::Catalog;
use crate::motion::{MotionFilter, MotionPermission, Orientation};
use crate::onboarding::{OnboardingSequencer, OnboardingView};
use crate::platform::Platform;
use crate::playback::{playback_rate, ZoomRange};
use crate::rotation::RotationController;
use crate::scheduler::{FiredTimer, FrameClock, Scheduler, Timer, TimerId};
use crate::selection::SelectionResolver;
use crate::tick::TickSynchronizer;
use crate::transition::{TransitionDurations, TransitionEvent, TransitionPhase, TransitionStateMachine};
use crate::visibility::{RingVisibility, VisibilityState};
use glam::DVec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Side effects the host must carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch and decode the tick and music assets, then report each through
    /// `Session::audio_asset_loaded`.
    FetchAudioAssets,
    /// Preload every image of a set, then call `Session::preload_complete`
    /// with `token`. Failed images count as loaded.
    Preload {
        token: u64,
        index: usize,
        images: Vec<String>,
    },
    /// Show this set; issued behind the full blackout.
    ActivateSet { index: usize, name: String },
    RendererEnabled(bool),
    Orientation(Orientation),
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Read-only snapshot for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub rotation: f64,
    pub target_rotation: f64,
    pub item_count: usize,
    pub angle_per_item: Option<f64>,
    pub selected_index: Option<usize>,
    pub settling_index: Option<usize>,
    pub active_set: Option<usize>,
    pub highlighted_set: Option<usize>,
    pub phase: TransitionPhase,
    pub overlay_opacity: f32,
    pub ring: RingVisibility,
    pub dragging: bool,
    pub muted: bool,
    pub started: bool,
    pub playback_rate: f64,
    pub motion_permission: MotionPermission,
    pub onboarding: OnboardingView,
}

pub struct Session<B: AudioBackend, P: Platform> {
    config: EngineConfig,
    catalog: Catalog,
    platform: P,
    scheduler: Scheduler,
    clock: FrameClock,
    rotation: RotationController,
    selection: SelectionResolver,
    gestures: GestureClassifier,
    visibility: VisibilityState,
    ticks: TickSynchronizer,
    transition: TransitionStateMachine,
    audio: AudioEngine<B>,
    onboarding: OnboardingSequencer,
    motion: MotionFilter,
    permission: MotionPermission,
    drag_start_index: Option<usize>,
    wheel_timer: Option<TimerId>,
    playback_rate: f64,
    renderer_enabled: bool,
    started: bool,
    torn_down: bool,
    effects: Effects,
}

impl<B: AudioBackend, P: Platform> Session<B, P> {
    pub fn new(catalog: Catalog, config: EngineConfig, backend: B, platform: P) -> Self {
        let touch = platform.is_touch_class();
        let count = catalog.len();
        let permission = if platform.needs_explicit_permission() {
            MotionPermission::Prompt
        } else {
            MotionPermission::NotRequired
        };
        let initial = (count > 0).then_some(0);

        let mut scheduler = Scheduler::new();
        let mut onboarding = OnboardingSequencer::new(&config);
        onboarding.begin(&mut scheduler);

        let mut rotation = RotationController::new(
            count,
            config.easing,
            config.easing_epsilon,
            config.snap_threshold,
        );
        rotation.jump_to(0.0);
        let mut ticks = TickSynchronizer::new(config.clicks_per_full_circle);
        ticks.reset(rotation.current());

        let mut session = Self {
            clock: FrameClock::new(config.step_duration(), config.max_steps_per_frame),
            selection: SelectionResolver::new(count, config.settle_threshold_for(touch)),
            gestures: GestureClassifier::new(config.click_drag_threshold_px),
            visibility: VisibilityState::new(Duration::from_millis(config.ring_hide_delay_ms)),
            transition: TransitionStateMachine::new(initial, TransitionDurations::from(&config)),
            audio: AudioEngine::new(backend, config.music_volume_for(touch), config.tick_volume),
            motion: MotionFilter::new(
                config.motion_smoothing,
                config.motion_tilt_limit_deg,
                config.motion_display_limit_deg,
            ),
            rotation,
            ticks,
            scheduler,
            onboarding,
            permission,
            drag_start_index: None,
            wheel_timer: None,
            playback_rate: 1.0,
            renderer_enabled: false,
            started: false,
            torn_down: false,
            effects: Effects::new(),
            catalog,
            config,
            platform,
        };

        if let Some(set) = initial.and_then(|i| session.catalog.get(i)) {
            session.effects.push(Effect::ActivateSet {
                index: 0,
                name: set.name.clone(),
            });
        }
        if session.audio.init() {
            session.effects.push(Effect::FetchAudioAssets);
        }
        if session.audio.is_ready() {
            session.onboarding.set_assets_ready(&mut session.scheduler);
        }
        log::info!(
            "[session] {} item sets, touch={}, permission={:?}",
            count,
            touch,
            session.permission
        );
        session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn audio(&self) -> &AudioEngine<B> {
        &self.audio
    }

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    pub fn transition(&self) -> &TransitionStateMachine {
        &self.transition
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn drain_effects(&mut self) -> Effects {
        std::mem::take(&mut self.effects)
    }

    // ---------------- Time ----------------

    /// Advance session time by a host frame of length `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if self.torn_down {
            return;
        }
        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            let now = self.scheduler.now() + self.clock.step();
            self.scheduler.set_now(now);
            while let Some(fired) = self.scheduler.pop_due() {
                self.dispatch_timer(fired);
            }
            self.fixed_step();
        }
    }

    fn fixed_step(&mut self) {
        self.rotation.step();
        let crossed = self.ticks.observe(self.rotation.current());
        for _ in 0..crossed.min(MAX_AUDIBLE_TICKS_PER_STEP) {
            self.audio.play_tick();
        }
        if !self.gesture_in_progress() {
            self.rotation.enforce_snap();
            self.check_settled();
        }
    }

    fn dispatch_timer(&mut self, fired: FiredTimer) {
        match fired.timer {
            Timer::TransitionPreloadTimeout
            | Timer::TransitionFadeToBlack
            | Timer::TransitionHold
            | Timer::TransitionFadeOut => {
                match self.transition.on_timer(fired, &mut self.scheduler) {
                    Some(TransitionEvent::Swapped(index)) => {
                        if let Some(set) = self.catalog.get(index) {
                            self.effects.push(Effect::ActivateSet {
                                index,
                                name: set.name.clone(),
                            });
                        }
                    }
                    Some(TransitionEvent::Finished) => {
                        log::info!("[transition] finished on set {:?}", self.transition.active());
                        self.sync_renderer();
                    }
                    None => {}
                }
            }
            Timer::RingHide => self.visibility.on_timer(fired),
            Timer::WheelSettle => {
                if self.wheel_timer == Some(fired.id) {
                    self.wheel_timer = None;
                    self.rotation.snap_to_nearest();
                    self.visibility.linger(&mut self.scheduler);
                }
            }
            Timer::OnboardingMinLoading
            | Timer::OnboardingActionReady
            | Timer::OnboardingFadeOut
            | Timer::OnboardingFadeIn
            | Timer::OnboardingWorkingFrame => self.onboarding.on_timer(fired, &mut self.scheduler),
        }
    }

    /// One transition per gesture: decide once the ring has settled, comparing
    /// against the index the gesture started from.
    fn check_settled(&mut self) {
        if !self.transition.is_idle() {
            return;
        }
        let Some(start) = self.drag_start_index else {
            return;
        };
        let Some(index) = self
            .selection
            .settled_index(self.rotation.current(), self.rotation.target())
        else {
            return;
        };
        self.drag_start_index = None;
        if index != start {
            self.begin_transition(index);
        }
    }

    fn begin_transition(&mut self, index: usize) {
        let Some(ticket) = self.transition.request(index, &mut self.scheduler) else {
            return;
        };
        self.visibility.suppress(&mut self.scheduler);
        let images = self
            .catalog
            .get(index)
            .map(|s| s.images.clone())
            .unwrap_or_default();
        self.effects.push(Effect::Preload {
            token: ticket.token,
            index,
            images,
        });
        self.sync_renderer();
    }

    fn sync_renderer(&mut self) {
        let enabled = !self.torn_down && self.started && self.transition.is_idle();
        if enabled != self.renderer_enabled {
            self.renderer_enabled = enabled;
            self.effects.push(Effect::RendererEnabled(enabled));
        }
    }

    // ---------------- Gestures ----------------

    fn gesture_in_progress(&self) -> bool {
        self.gestures.is_active() || self.wheel_timer.is_some()
    }

    fn accepts_gestures(&self) -> bool {
        !self.torn_down && self.started && self.transition.is_idle() && !self.catalog.is_empty()
    }

    fn settling_index(&self) -> Option<usize> {
        self.selection.settling_index(self.rotation.target())
    }

    /// Pointer pressed over the ring. `candidate` is the item under the pointer.
    /// Returns whether the gesture was accepted; the host captures the pointer
    /// only then.
    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        position: DVec2,
        center: DVec2,
        candidate: Option<usize>,
    ) -> bool {
        if !self.accepts_gestures() {
            return false;
        }
        let selected = self.settling_index();
        let primary = candidate.is_some() && candidate == selected;
        if !primary && !self.visibility.is_visible() {
            return false;
        }
        if !self.gestures.begin(pointer_id, position, center, candidate) {
            return false;
        }
        if let Some(id) = self.wheel_timer.take() {
            self.scheduler.cancel(id);
        }
        if self.drag_start_index.is_none() {
            self.drag_start_index = selected;
        }
        self.visibility.show(&mut self.scheduler);
        log::debug!("[gesture] down pointer={} candidate={:?}", pointer_id, candidate);
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, position: DVec2, center: DVec2) {
        if let Some(delta) = self.gestures.move_to(pointer_id, position, center) {
            // ring follows the finger
            self.rotation.rotate_target(-delta);
        }
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> Option<GestureOutcome> {
        let outcome = self.gestures.end(pointer_id)?;
        match outcome {
            GestureOutcome::Click(index) => {
                log::debug!("[gesture] click on item {}", index);
                self.rotation.rotate_to_index(index);
            }
            GestureOutcome::Drag => self.rotation.snap_to_nearest(),
        }
        self.visibility.linger(&mut self.scheduler);
        Some(outcome)
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) -> Option<GestureOutcome> {
        self.pointer_up(pointer_id)
    }

    pub fn hover(&mut self, inside: bool) {
        if self.torn_down || !self.started || !self.transition.is_idle() {
            return;
        }
        if inside {
            self.visibility.show(&mut self.scheduler);
        } else if !self.gesture_in_progress() && self.visibility.is_visible() {
            self.visibility.linger(&mut self.scheduler);
        }
    }

    /// Wheel scroll in pixels; the ring snaps once the wheel goes quiet.
    pub fn wheel(&mut self, delta_px: f64) -> bool {
        if !self.accepts_gestures() || self.gestures.is_active() || !delta_px.is_finite() {
            return false;
        }
        if self.drag_start_index.is_none() {
            self.drag_start_index = self.settling_index();
        }
        let delta_px = delta_px.clamp(-WHEEL_MAX_DELTA_PX, WHEEL_MAX_DELTA_PX);
        self.rotation
            .rotate_target(delta_px * self.config.wheel_radians_per_pixel);
        if let Some(id) = self.wheel_timer.take() {
            self.scheduler.cancel(id);
        }
        self.wheel_timer = Some(self.scheduler.schedule(
            Duration::from_millis(self.config.wheel_settle_ms),
            Timer::WheelSettle,
        ));
        self.visibility.show(&mut self.scheduler);
        true
    }

    /// Step the selection by whole items (keyboard).
    pub fn nudge(&mut self, steps: i32) -> bool {
        if !self.accepts_gestures() || self.gestures.is_active() {
            return false;
        }
        let (Some(nearest), Some(step)) = (
            self.rotation.nearest_item_angle(),
            self.rotation.angle_per_item(),
        ) else {
            return false;
        };
        if let Some(id) = self.wheel_timer.take() {
            self.scheduler.cancel(id);
        }
        if self.drag_start_index.is_none() {
            self.drag_start_index = self.settling_index();
        }
        self.rotation.set_target(nearest + steps as f64 * step);
        self.visibility.linger(&mut self.scheduler);
        true
    }

    // ---------------- External signals ----------------

    pub fn zoom_changed(&mut self, exponent: f64, min: f64, max: f64) {
        if self.torn_down || !exponent.is_finite() {
            return;
        }
        self.playback_rate = playback_rate(exponent, ZoomRange::new(min, max));
        self.audio.set_playback_rate(self.playback_rate);
    }

    pub fn renderer_ready(&mut self) {
        if self.torn_down {
            return;
        }
        self.onboarding.set_renderer_ready(&mut self.scheduler);
    }

    pub fn preload_complete(&mut self, token: u64) -> bool {
        if self.torn_down {
            return false;
        }
        self.transition.preload_complete(token, &mut self.scheduler)
    }

    pub fn audio_asset_loaded(&mut self, asset: AudioAsset, result: Result<B::Buffer, AudioError>) {
        if self.torn_down {
            return;
        }
        self.audio.asset_loaded(asset, result);
        if self.audio.is_ready() && !self.onboarding.view().assets_ready {
            self.onboarding.set_assets_ready(&mut self.scheduler);
        }
    }

    pub fn motion_sample(&mut self, x: f64, y: f64) {
        if self.torn_down {
            return;
        }
        let orientation = self.motion.sample(x, y);
        if self.started && self.permission.allows_input() {
            self.effects.push(Effect::Orientation(orientation));
        }
    }

    pub fn motion_permission_resolved(&mut self, granted: bool) {
        if self.permission == MotionPermission::Denied {
            return;
        }
        self.permission = if granted {
            MotionPermission::Granted
        } else {
            MotionPermission::Denied
        };
        log::info!("[motion] permission {:?}", self.permission);
    }

    // ---------------- Onboarding / audio control ----------------

    pub fn onboarding_continue(&mut self) -> bool {
        !self.torn_down && self.onboarding.advance(&mut self.scheduler)
    }

    /// Final onboarding action. Must be called from the user gesture itself:
    /// the permission prompt and audio resume both depend on it.
    pub fn enter(&mut self) -> bool {
        if self.torn_down || self.started {
            return false;
        }
        if !self.onboarding.complete(&mut self.scheduler) {
            return false;
        }
        if self.permission == MotionPermission::Prompt && self.platform.needs_explicit_permission() {
            self.platform.request_motion_permission();
            self.permission = MotionPermission::Requested;
        }
        self.audio.start();
        self.started = true;
        self.sync_renderer();
        log::info!("[session] started");
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        if self.torn_down {
            return self.audio.is_muted();
        }
        self.audio.toggle_mute()
    }

    /// End of session: cancel every timer, stop audio, ignore further input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.transition.cancel(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.gestures.reset();
        self.wheel_timer = None;
        self.drag_start_index = None;
        self.audio.teardown();
        self.torn_down = true;
        self.sync_renderer();
        log::info!("[session] torn down");
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            rotation: self.rotation.current(),
            target_rotation: self.rotation.target(),
            item_count: self.catalog.len(),
            angle_per_item: self.rotation.angle_per_item(),
            selected_index: self.selection.current_index(self.rotation.current()),
            settling_index: self.settling_index(),
            active_set: self.transition.active(),
            highlighted_set: self.transition.highlighted(),
            phase: self.transition.phase(),
            overlay_opacity: self.transition.overlay_opacity(self.scheduler.now()),
            ring: self.visibility.state(),
            dragging: self.gestures.session().is_some_and(|s| s.committed_as_drag),
            muted: self.audio.is_muted(),
            started: self.started,
            playback_rate: self.playback_rate,
            motion_permission: self.permission,
            onboarding: self.onboarding.view(),
        }
    }
}
