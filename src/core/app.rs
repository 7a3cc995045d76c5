use super::camera::CameraRig;
use super::error::VizError;
use super::input::{pointer_offset, PointerOffset, Viewport};
use super::playback::Controls;
use super::uniforms::ShaderUniforms;
use glam::Vec3;

/// Draws one frame through the post-processing chain.
pub trait FrameRenderer {
    /// Recoverable surface problems are handled inside; an `Err` means the
    /// frame was not presented.
    fn render(&mut self, camera: &CameraRig, uniforms: &ShaderUniforms) -> Result<(), VizError>;

    /// Resize the surface and every pass buffer. Same-size calls are no-ops.
    fn set_size(&mut self, width: u32, height: u32);
}

/// Transport control and analysis for the single audio asset.
pub trait AudioTransport {
    fn play(&mut self);
    fn pause(&mut self);
    fn average_frequency(&mut self) -> f32;

    /// Why the asset can never play, once loading has failed.
    fn failure(&self) -> Option<String> {
        None
    }

    /// Keep the listener attached to the camera.
    fn follow_camera(&mut self, _eye: Vec3, _forward: Vec3) {}
}

/// What the status overlay shows after the viewer presses play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusNotice {
    /// Any earlier render-stop message is stale.
    Clear,
    /// Audio is permanently unavailable; keep saying so.
    Show(String),
}

/// Application context shared by the frame loop, input handlers and renderer.
pub struct App<R, A> {
    viewport: Viewport,
    camera: CameraRig,
    pointer: PointerOffset,
    uniforms: ShaderUniforms,
    controls: Controls,
    renderer: R,
    audio: A,
    frames_rendered: u64,
}

impl<R: FrameRenderer, A: AudioTransport> App<R, A> {
    pub fn new(renderer: R, audio: A, viewport: Viewport) -> Self {
        Self {
            viewport,
            camera: CameraRig::with_aspect(viewport.aspect()),
            pointer: PointerOffset::default(),
            uniforms: ShaderUniforms::default(),
            controls: Controls::default(),
            renderer,
            audio,
            frames_rendered: 0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn pointer(&self) -> PointerOffset {
        self.pointer
    }

    pub fn uniforms(&self) -> &ShaderUniforms {
        &self.uniforms
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn is_playing(&self) -> bool {
        self.controls.is_playing()
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.pointer = pointer_offset(client_x, client_y, &self.viewport);
    }

    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        if !self.viewport.resize(width, height, pixel_ratio) {
            return;
        }
        self.camera.set_aspect(self.viewport.aspect());
        let (w, h) = self.viewport.buffer_size();
        self.renderer.set_size(w, h);
    }

    pub fn play_clicked(&mut self) -> StatusNotice {
        self.audio.play();
        self.controls.play_clicked();
        match self.audio.failure() {
            Some(reason) => StatusNotice::Show(reason),
            None => StatusNotice::Clear,
        }
    }

    pub fn pause_clicked(&mut self) {
        self.audio.pause();
        self.controls.pause_clicked();
    }

    /// Run one frame. Returns whether the loop should schedule another tick.
    pub fn tick(&mut self, elapsed_sec: f32) -> Result<bool, VizError> {
        if !self.controls.is_playing() {
            return Ok(false);
        }

        self.camera.ease_toward(self.pointer);
        self.camera.look_at(Vec3::ZERO);
        self.audio
            .follow_camera(self.camera.eye, self.camera.forward());

        let frequency = self.audio.average_frequency();
        self.uniforms.refresh(elapsed_sec, frequency);

        match self.renderer.render(&self.camera, &self.uniforms) {
            Ok(()) => self.frames_rendered += 1,
            Err(e) if e.is_fatal() => {
                self.audio.pause();
                self.controls.halt();
                return Err(e);
            }
            Err(e) => log::warn!("[loop] frame skipped: {}", e),
        }

        Ok(self.controls.is_playing())
    }
}
