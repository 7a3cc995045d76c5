use crate::core::{
    average_frequency, AudioTransport, PlayDecision, Transport, VizError, ANALYSER_FFT_SIZE,
    AUDIO_OUTPUT_GAIN,
};
use glam::Vec3;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn dom_err(what: &str, e: JsValue) -> VizError {
    VizError::Dom(format!("{}: {:?}", what, e))
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, VizError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| dom_err(label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// Create analyser and an appropriately sized byte buffer
fn create_analyser(audio_ctx: &web::AudioContext) -> Result<(web::AnalyserNode, Vec<u8>), VizError> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| dom_err("AnalyserNode", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let bins = vec![0u8; analyser.frequency_bin_count() as usize];
    Ok((analyser, bins))
}

/// Fetch and decode the audio asset.
pub async fn fetch_audio_buffer(
    audio_ctx: &web::AudioContext,
    path: &str,
) -> Result<web::AudioBuffer, VizError> {
    let load_err = |reason: String| VizError::AssetLoad {
        path: path.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| load_err("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| load_err(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| load_err(format!("not a Response: {:?}", e)))?;
    if !resp.ok() {
        return Err(load_err(format!("HTTP {}", resp.status())));
    }
    let bytes = resp
        .array_buffer()
        .map_err(|e| load_err(format!("{:?}", e)))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(bytes)
        .await
        .map_err(|e| load_err(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| load_err(format!("not an ArrayBuffer: {:?}", e)))?;
    let decoded = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| load_err(format!("decode: {:?}", e)))?;
    JsFuture::from(decoded)
        .await
        .map_err(|e| load_err(format!("decode: {:?}", e)))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| load_err(format!("not an AudioBuffer: {:?}", e)))
}

/// Web Audio graph: buffer source -> analyser -> output gain -> destination.
pub struct WebAudio {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    listener: web::AudioListener,
    bins: Vec<u8>,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    transport: Transport,
    // Keeps the output node alive alongside the graph.
    _output: web::GainNode,
}

impl WebAudio {
    pub fn new() -> Result<Self, VizError> {
        let ctx = web::AudioContext::new().map_err(|e| dom_err("AudioContext", e))?;
        let (analyser, bins) = create_analyser(&ctx)?;
        let output = create_gain(&ctx, AUDIO_OUTPUT_GAIN, "output gain")?;
        analyser
            .connect_with_audio_node(&output)
            .map_err(|e| dom_err("connect analyser", e))?;
        output
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| dom_err("connect output", e))?;
        let listener = ctx.listener();
        log::info!(
            "[audio] context ready, analyser bins={}",
            analyser.frequency_bin_count()
        );
        Ok(Self {
            ctx,
            analyser,
            listener,
            bins,
            buffer: None,
            source: None,
            transport: Transport::default(),
            _output: output,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    pub fn attach_buffer(&mut self, buffer: web::AudioBuffer) {
        log::info!("[audio] decoded {:.1}s of audio", buffer.duration());
        self.transport.attach(buffer.duration());
        self.buffer = Some(buffer);
    }

    pub fn mark_failed(&mut self, err: &VizError) {
        self.transport.fail(err.to_string());
    }

    // Browsers keep the context suspended until a user gesture.
    fn resume_context(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    fn start_source(&mut self, offset: f64) -> Result<(), VizError> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };
        let src = web::AudioBufferSourceNode::new(&self.ctx)
            .map_err(|e| dom_err("AudioBufferSourceNode", e))?;
        src.set_buffer(Some(buffer));
        src.connect_with_audio_node(&self.analyser)
            .map_err(|e| dom_err("connect source", e))?;
        src.start_with_when_and_grain_offset(0.0, offset)
            .map_err(|e| dom_err("start source", e))?;
        self.source = Some(src);
        Ok(())
    }

    fn stop_source(&mut self) {
        if let Some(src) = self.source.take() {
            _ = src.stop();
            _ = src.disconnect();
        }
        self.transport.pause(self.ctx.current_time());
    }
}

impl AudioTransport for WebAudio {
    fn play(&mut self) {
        self.resume_context();
        let now = self.ctx.current_time();
        match self.transport.request_play(now) {
            PlayDecision::Start(offset) => {
                if let Err(e) = self.start_source(offset) {
                    self.transport.pause(now);
                    log::error!("[audio] {}", e);
                }
            }
            PlayDecision::NotReady => {
                log::warn!("[audio] play requested before the asset finished loading");
            }
            PlayDecision::Unavailable(reason) => {
                log::warn!("[audio] play ignored, asset unavailable: {}", reason);
            }
            PlayDecision::AlreadyRunning => log::debug!("[audio] already playing"),
        }
    }

    fn pause(&mut self) {
        let now = self.ctx.current_time();
        if self.transport.is_running() {
            self.stop_source();
            log::info!("[audio] paused at {:.2}s", self.transport.position(now));
        }
    }

    fn failure(&self) -> Option<String> {
        self.transport.failure().map(str::to_string)
    }

    fn average_frequency(&mut self) -> f32 {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        average_frequency(&self.bins)
    }

    fn follow_camera(&mut self, eye: Vec3, forward: Vec3) {
        self.listener
            .set_position(eye.x as f64, eye.y as f64, eye.z as f64);
        _ = self.listener.set_orientation(
            forward.x as f64,
            forward.y as f64,
            forward.z as f64,
            0.0,
            1.0,
            0.0,
        );
    }
}
