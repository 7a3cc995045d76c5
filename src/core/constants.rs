// Shared tuning constants for the visualizer.

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, -20.0, 14.0];
// Wraps around to an effective 100 degree vertical field of view.
pub const CAMERA_FOV_DEG: f32 = 820.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Per-tick easing toward the pointer target (0..1, 1 = snap)
pub const CAMERA_EASE_X: f32 = 0.05;
pub const CAMERA_EASE_Y: f32 = 0.5;

// Pointer pixels per world unit of camera offset
pub const POINTER_DIVISOR: f32 = 100.0;

// Mesh
pub const MESH_RADIUS: f32 = 4.0;
pub const MESH_DETAIL: u32 = 100;

// Audio
pub const AUDIO_ASSET_PATH: &str = "./assets/Beats.mp3";
pub const ANALYSER_FFT_SIZE: u32 = 32;
pub const AUDIO_OUTPUT_GAIN: f32 = 1.0;

// Static shader color channels
pub const UNIFORM_RED: f32 = 1.0;
pub const UNIFORM_GREEN: f32 = 0.1;
pub const UNIFORM_BLUE: f32 = 0.1;

// Bloom defaults
pub const BLOOM_THRESHOLD: f32 = 0.5;
pub const BLOOM_STRENGTH: f32 = 0.5;
pub const BLOOM_RADIUS: f32 = 0.8;
pub const BLOOM_SMOOTH_WIDTH: f32 = 0.01;

// Scene multisampling (1 disables)
pub const MSAA_SAMPLES: u32 = 4;

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const VERTEX_SHADER_ID: &str = "vertexshader";
pub const FRAGMENT_SHADER_ID: &str = "fragmentshader";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const PAUSE_BUTTON_ID: &str = "pause-button";
pub const CONTROLS_Z_INDEX: u32 = 1000;
