// Deterministic host stand-ins shared by the engine tests.

#![allow(dead_code)]
use spindial_core::{
    AudioAsset, AudioBackend, AudioError, Catalog, EngineConfig, ItemSet, Platform, Session,
};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MockBackend {
    pub fail_context: bool,
    pub fail_voice: bool,
    pub context_created: bool,
    pub running: bool,
    pub next_voice: u32,
    pub loops_started: Vec<(&'static str, f32)>,
    pub one_shots: u32,
    pub gains: Vec<(u32, f32)>,
    pub rates: Vec<(u32, f32)>,
    pub stopped: Vec<u32>,
    pub closed: bool,
}

impl AudioBackend for MockBackend {
    type Buffer = &'static str;
    type Voice = u32;

    fn create_context(&mut self) -> Result<(), AudioError> {
        if self.fail_context {
            return Err(AudioError::Context("unsupported".into()));
        }
        self.context_created = true;
        Ok(())
    }

    fn resume(&mut self) {
        self.running = self.context_created;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start_loop(&mut self, buffer: &&'static str, gain: f32) -> Result<u32, AudioError> {
        if self.fail_voice {
            return Err(AudioError::Voice("no voices".into()));
        }
        self.loops_started.push((*buffer, gain));
        self.next_voice += 1;
        Ok(self.next_voice)
    }

    fn set_voice_gain(&mut self, voice: &u32, gain: f32) {
        self.gains.push((*voice, gain));
    }

    fn set_voice_rate(&mut self, voice: &u32, rate: f32) {
        self.rates.push((*voice, rate));
    }

    fn play_one_shot(&mut self, _buffer: &&'static str, _gain: f32) -> Result<(), AudioError> {
        self.one_shots += 1;
        Ok(())
    }

    fn stop_voice(&mut self, voice: u32) {
        self.stopped.push(voice);
    }

    fn close(&mut self) {
        self.running = false;
        self.closed = true;
    }
}

#[derive(Debug, Default)]
pub struct MockPlatform {
    pub explicit_permission: bool,
    pub touch_class: bool,
    pub permission_requests: u32,
}

impl Platform for MockPlatform {
    fn needs_explicit_permission(&self) -> bool {
        self.explicit_permission
    }

    fn request_motion_permission(&mut self) {
        self.permission_requests += 1;
    }

    fn is_touch_class(&self) -> bool {
        self.touch_class
    }
}

pub type TestSession = Session<MockBackend, MockPlatform>;

pub fn catalog(n: usize) -> Catalog {
    let sets = (0..n)
        .map(|i| ItemSet {
            name: format!("set-{}", i),
            images: vec![format!("set-{}/a.jpg", i), format!("set-{}/b.jpg", i)],
        })
        .collect();
    Catalog::new(sets).expect("valid catalog")
}

pub fn session_with(n: usize, backend: MockBackend, platform: MockPlatform) -> TestSession {
    Session::new(catalog(n), EngineConfig::default(), backend, platform)
}

pub fn session(n: usize) -> TestSession {
    session_with(n, MockBackend::default(), MockPlatform::default())
}

/// Drive the session with ~60 Hz host frames.
pub fn advance_ms(s: &mut TestSession, ms: u64) {
    let mut left = ms;
    while left > 0 {
        let dt = left.min(16);
        s.advance(Duration::from_millis(dt));
        left -= dt;
    }
}

pub fn load_assets(s: &mut TestSession) {
    s.audio_asset_loaded(AudioAsset::Tick, Ok("tick"));
    s.audio_asset_loaded(AudioAsset::Music, Ok("music"));
}

/// Run the whole intro: assets, first frame, both stages, enter.
pub fn enter(s: &mut TestSession) {
    load_assets(s);
    s.renderer_ready();
    advance_ms(s, 1300);
    assert!(s.onboarding_continue(), "stage one action should be ready");
    advance_ms(s, 2300);
    assert!(s.enter(), "stage two action should be ready");
}

pub fn started(n: usize) -> TestSession {
    let mut s = session(n);
    enter(&mut s);
    s.drain_effects();
    s
}
