// Audio engine lifecycle against a recording backend.

mod common;

use common::MockBackend;
use spindial_core::{AudioAsset, AudioEngine, AudioError, EngineStatus};

fn engine() -> AudioEngine<MockBackend> {
    AudioEngine::new(MockBackend::default(), 0.5, 1.0)
}

fn load_error(asset: AudioAsset) -> AudioError {
    AudioError::Load {
        asset: asset.label(),
        reason: "404".into(),
    }
}

#[test]
fn init_happens_once() {
    let mut e = engine();
    assert!(e.init());
    assert!(!e.init());
    assert_eq!(e.status(), EngineStatus::Loading);
    assert!(!e.backend().running, "context starts suspended");
}

#[test]
fn missing_context_means_ready_and_silent() {
    let mut e = AudioEngine::new(
        MockBackend {
            fail_context: true,
            ..MockBackend::default()
        },
        0.5,
        1.0,
    );
    assert!(!e.init());
    assert!(e.is_ready());
    e.start();
    e.play_tick();
    assert!(!e.has_voice());
    assert_eq!(e.backend().one_shots, 0);
}

#[test]
fn ready_once_both_assets_settle_even_on_failure() {
    let mut e = engine();
    e.init();
    e.asset_loaded(AudioAsset::Tick, Err(load_error(AudioAsset::Tick)));
    assert!(!e.is_ready());
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    assert!(e.is_ready());
    e.start();
    assert!(e.has_voice());
    e.play_tick();
    assert_eq!(e.backend().one_shots, 0, "no tick buffer, no tick");
}

#[test]
fn start_resumes_and_begins_music_at_volume() {
    let mut e = engine();
    e.init();
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    e.start();
    assert!(e.backend().running);
    assert_eq!(e.backend().loops_started, vec![("music", 0.5)]);
    e.start();
    assert_eq!(e.backend().loops_started.len(), 1, "only one music voice");
}

#[test]
fn music_starts_when_it_finishes_decoding_after_enter() {
    let mut e = engine();
    e.init();
    e.start();
    assert!(!e.has_voice());
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    assert!(e.has_voice());
}

#[test]
fn ticks_need_a_running_context_and_no_mute() {
    let mut e = engine();
    e.init();
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    e.play_tick();
    assert_eq!(e.backend().one_shots, 0, "suspended");
    e.start();
    e.play_tick();
    e.play_tick();
    assert_eq!(e.backend().one_shots, 2);
    e.set_muted(true);
    e.play_tick();
    assert_eq!(e.backend().one_shots, 2);
}

#[test]
fn mute_zeroes_gain_and_freezes_rate() {
    let mut e = engine();
    e.init();
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    e.start();
    e.set_playback_rate(1.5);
    assert!(e.toggle_mute());
    e.set_playback_rate(2.0);
    assert_eq!(e.backend().rates, vec![(1, 1.5)]);
    assert_eq!(e.backend().gains, vec![(1, 0.0)]);
    assert!(!e.toggle_mute());
    assert_eq!(e.backend().gains.last(), Some(&(1, 0.5)));
}

#[test]
fn unmute_creates_the_voice_lazily() {
    let mut e = AudioEngine::new(
        MockBackend {
            fail_voice: true,
            ..MockBackend::default()
        },
        0.5,
        1.0,
    );
    e.init();
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    e.start();
    assert!(!e.has_voice());
    e.set_muted(true);
    e.backend_mut().fail_voice = false;
    e.set_muted(false);
    assert!(e.has_voice());
}

#[test]
fn teardown_stops_and_closes() {
    let mut e = engine();
    e.init();
    e.asset_loaded(AudioAsset::Tick, Ok("tick"));
    e.asset_loaded(AudioAsset::Music, Ok("music"));
    e.start();
    e.teardown();
    assert_eq!(e.status(), EngineStatus::TornDown);
    assert_eq!(e.backend().stopped, vec![1]);
    assert!(e.backend().closed);
    e.start();
    e.play_tick();
    assert_eq!(e.backend().loops_started.len(), 1);
}
