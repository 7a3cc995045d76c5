pub mod app;
pub mod audio;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod playback;
pub mod post;
pub mod uniforms;

pub use app::*;
pub use audio::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use playback::*;
pub use post::*;
pub use uniforms::*;

// Post-processing shaders bundled as a string constant
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
