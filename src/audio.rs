use spindial_core::{AudioAsset, AudioBackend, AudioError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// WebAudio implementation of the engine's audio backend. The context is
/// created suspended and only resumed from the user's enter gesture.
#[derive(Default)]
pub struct WebAudioBackend {
    ctx: Option<web::AudioContext>,
}

pub struct MusicVoice {
    source: web::AudioBufferSourceNode,
    gain: web::GainNode,
}

fn js_err(e: wasm_bindgen::JsValue) -> AudioError {
    AudioError::Voice(format!("{:?}", e))
}

// Create a GainNode with an initial value routed to the destination
fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| {
        log::error!("[audio] {} GainNode error: {:?}", label, e);
        js_err(e)
    })?;
    g.gain().set_value(value);
    g.connect_with_audio_node(&audio_ctx.destination())
        .map_err(js_err)?;
    Ok(g)
}

impl WebAudioBackend {
    pub fn context(&self) -> Option<web::AudioContext> {
        self.ctx.clone()
    }

    fn source(&self, buffer: &web::AudioBuffer, gain: f32, label: &str) -> Result<(web::AudioBufferSourceNode, web::GainNode), AudioError> {
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| AudioError::Voice("no audio context".into()))?;
        let gain_node = create_gain(ctx, gain, label)?;
        let source = ctx.create_buffer_source().map_err(js_err)?;
        source.set_buffer(Some(buffer));
        source.connect_with_audio_node(&gain_node).map_err(js_err)?;
        Ok((source, gain_node))
    }
}

impl AudioBackend for WebAudioBackend {
    type Buffer = web::AudioBuffer;
    type Voice = MusicVoice;

    fn create_context(&mut self) -> Result<(), AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Context(format!("{:?}", e)))?;
        // stays silent until the enter gesture resumes it
        _ = ctx.suspend();
        self.ctx = Some(ctx);
        Ok(())
    }

    fn resume(&mut self) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.resume();
        }
    }

    fn is_running(&self) -> bool {
        self.ctx
            .as_ref()
            .is_some_and(|c| c.state() == web::AudioContextState::Running)
    }

    fn start_loop(&mut self, buffer: &web::AudioBuffer, gain: f32) -> Result<MusicVoice, AudioError> {
        let (source, gain) = self.source(buffer, gain, "music")?;
        source.set_loop(true);
        source.playback_rate().set_value(1.0);
        source.start().map_err(js_err)?;
        Ok(MusicVoice { source, gain })
    }

    fn set_voice_gain(&mut self, voice: &MusicVoice, gain: f32) {
        voice.gain.gain().set_value(gain);
    }

    fn set_voice_rate(&mut self, voice: &MusicVoice, rate: f32) {
        voice.source.playback_rate().set_value(rate);
    }

    fn play_one_shot(&mut self, buffer: &web::AudioBuffer, gain: f32) -> Result<(), AudioError> {
        let (source, _gain) = self.source(buffer, gain, "tick")?;
        source.start().map_err(js_err)
    }

    fn stop_voice(&mut self, voice: MusicVoice) {
        _ = voice.source.stop();
        _ = voice.gain.disconnect();
    }

    fn close(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            _ = ctx.close();
        }
    }
}

pub fn asset_url(asset: AudioAsset) -> &'static str {
    match asset {
        AudioAsset::Tick => crate::constants::TICK_URL,
        AudioAsset::Music => crate::constants::MUSIC_URL,
    }
}

/// Fetch an asset and decode it on the given context.
pub async fn fetch_and_decode(
    ctx: web::AudioContext,
    asset: AudioAsset,
) -> Result<web::AudioBuffer, AudioError> {
    let load_err = |e: wasm_bindgen::JsValue| AudioError::Load {
        asset: asset.label(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AudioError::Load {
        asset: asset.label(),
        reason: "no window".into(),
    })?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(asset_url(asset)))
        .await
        .map_err(load_err)?
        .dyn_into()
        .map_err(load_err)?;
    if !resp.ok() {
        return Err(AudioError::Load {
            asset: asset.label(),
            reason: format!("HTTP {}", resp.status()),
        });
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(load_err)?)
        .await
        .map_err(load_err)?;
    let data: js_sys::ArrayBuffer = bytes.dyn_into().map_err(load_err)?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&data).map_err(load_err)?)
        .await
        .map_err(load_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(load_err)
}
