//! Background music and tick playback.
//!
//! The engine owns the only music voice and the decoded buffers; the backend
//! only knows how to make sound. Decoding is asynchronous on every real host,
//! so the host fetches assets after `init` and hands results back through
//! `asset_loaded`. Failures never block: a missing buffer just means silence.

use crate::error::AudioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioAsset {
    Tick,
    Music,
}

impl AudioAsset {
    pub fn label(&self) -> &'static str {
        match self {
            AudioAsset::Tick => "tick",
            AudioAsset::Music => "music",
        }
    }
}

pub trait AudioBackend {
    type Buffer;
    type Voice;

    /// Create the output context in a suspended state.
    fn create_context(&mut self) -> Result<(), AudioError>;
    fn resume(&mut self);
    fn is_running(&self) -> bool;
    /// Start a looping voice at 1.0x rate and the given gain.
    fn start_loop(&mut self, buffer: &Self::Buffer, gain: f32) -> Result<Self::Voice, AudioError>;
    fn set_voice_gain(&mut self, voice: &Self::Voice, gain: f32);
    fn set_voice_rate(&mut self, voice: &Self::Voice, rate: f32);
    /// Fire-and-forget voice; overlapping calls must overlap audibly.
    fn play_one_shot(&mut self, buffer: &Self::Buffer, gain: f32) -> Result<(), AudioError>;
    fn stop_voice(&mut self, voice: Self::Voice);
    fn close(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    TornDown,
}

pub struct AudioEngine<B: AudioBackend> {
    backend: B,
    status: EngineStatus,
    tick: Option<B::Buffer>,
    music: Option<B::Buffer>,
    tick_settled: bool,
    music_settled: bool,
    voice: Option<B::Voice>,
    muted: bool,
    started: bool,
    music_volume: f32,
    tick_volume: f32,
}

impl<B: AudioBackend> AudioEngine<B> {
    pub fn new(backend: B, music_volume: f32, tick_volume: f32) -> Self {
        Self {
            backend,
            status: EngineStatus::Uninitialized,
            tick: None,
            music: None,
            tick_settled: false,
            music_settled: false,
            voice: None,
            muted: false,
            started: false,
            music_volume,
            tick_volume,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Ready once both assets have settled either way, or when no context
    /// could be created at all.
    pub fn is_ready(&self) -> bool {
        self.status == EngineStatus::Ready
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn has_voice(&self) -> bool {
        self.voice.is_some()
    }

    /// Create the context once. Returns `true` only on the call that created
    /// it, telling the host to fetch both assets.
    pub fn init(&mut self) -> bool {
        if self.status != EngineStatus::Uninitialized {
            return false;
        }
        match self.backend.create_context() {
            Ok(()) => {
                self.status = EngineStatus::Loading;
                log::info!("[audio] context created, loading assets");
                true
            }
            Err(e) => {
                log::warn!("[audio] {}; continuing without sound", e);
                self.status = EngineStatus::Ready;
                false
            }
        }
    }

    pub fn asset_loaded(&mut self, asset: AudioAsset, result: Result<B::Buffer, AudioError>) {
        if self.status != EngineStatus::Loading {
            return;
        }
        let buffer = match result {
            Ok(b) => Some(b),
            Err(e) => {
                log::warn!("[audio] {}", e);
                None
            }
        };
        match asset {
            AudioAsset::Tick => {
                self.tick = buffer;
                self.tick_settled = true;
            }
            AudioAsset::Music => {
                self.music = buffer;
                self.music_settled = true;
            }
        }
        if self.tick_settled && self.music_settled {
            self.status = EngineStatus::Ready;
            log::info!(
                "[audio] ready (tick={}, music={})",
                self.tick.is_some(),
                self.music.is_some()
            );
            if self.started {
                // the user already entered while music was still decoding
                self.ensure_music_voice();
            }
        }
    }

    /// Must run inside the user-gesture call stack.
    pub fn start(&mut self) {
        if self.status == EngineStatus::TornDown {
            return;
        }
        if self.status != EngineStatus::Uninitialized {
            self.backend.resume();
        }
        self.started = true;
        self.ensure_music_voice();
    }

    pub fn play_tick(&mut self) {
        if self.muted || self.status == EngineStatus::TornDown || !self.backend.is_running() {
            return;
        }
        if let Some(tick) = &self.tick {
            if let Err(e) = self.backend.play_one_shot(tick, self.tick_volume) {
                log::debug!("[audio] tick dropped: {}", e);
            }
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.status == EngineStatus::TornDown {
            return;
        }
        self.muted = muted;
        if let Some(voice) = &self.voice {
            let gain = if muted { 0.0 } else { self.music_volume };
            self.backend.set_voice_gain(voice, gain);
        } else if !muted && self.started {
            self.ensure_music_voice();
        }
        log::info!("[audio] muted={}", muted);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        if self.muted {
            return;
        }
        if let Some(voice) = &self.voice {
            self.backend.set_voice_rate(voice, rate as f32);
        }
    }

    /// Stop the music and close the context. Not restartable.
    pub fn teardown(&mut self) {
        if self.status == EngineStatus::TornDown {
            return;
        }
        if let Some(voice) = self.voice.take() {
            self.backend.stop_voice(voice);
        }
        if self.status != EngineStatus::Uninitialized {
            self.backend.close();
        }
        self.status = EngineStatus::TornDown;
        log::info!("[audio] torn down");
    }

    fn ensure_music_voice(&mut self) {
        if self.muted || self.voice.is_some() || !self.started {
            return;
        }
        let Some(music) = &self.music else {
            return;
        };
        match self.backend.start_loop(music, self.music_volume) {
            Ok(voice) => self.voice = Some(voice),
            Err(e) => log::warn!("[audio] music voice failed: {}", e),
        }
    }
}
