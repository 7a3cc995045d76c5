use super::constants::{BLOOM_RADIUS, BLOOM_SMOOTH_WIDTH, BLOOM_STRENGTH, BLOOM_THRESHOLD};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    Scene,
    Bloom,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomParams {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
    pub smooth_width: f32,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            threshold: BLOOM_THRESHOLD,
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            smooth_width: BLOOM_SMOOTH_WIDTH,
        }
    }
}

impl BloomParams {
    /// Blur tap spacing in bloom texels; a radius of 0 still blurs a little.
    pub fn tap_spacing(&self) -> f32 {
        1.0 + 2.0 * self.radius.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToneMapping {
    #[default]
    None,
    Aces,
}

impl ToneMapping {
    pub fn shader_code(self) -> f32 {
        match self {
            ToneMapping::None => 0.0,
            ToneMapping::Aces => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputParams {
    pub tone_mapping: ToneMapping,
    pub exposure: f32,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            tone_mapping: ToneMapping::None,
            exposure: 1.0,
        }
    }
}

/// Uniform block shared by every post step (48 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub texel: [f32; 2],
    pub blur_dir: [f32; 2],
    pub threshold: f32,
    pub smooth_width: f32,
    pub strength: f32,
    pub tone_mapping: f32,
    pub exposure: f32,
    pub encode_srgb: f32,
    pub _pad: [f32; 2],
}

/// The fixed pass order and the buffer sizes each pass renders at.
#[derive(Clone, Debug)]
pub struct PostChainPlan {
    passes: SmallVec<[PassKind; 4]>,
    width: u32,
    height: u32,
}

impl PostChainPlan {
    pub fn new(width: u32, height: u32) -> Self {
        let mut passes = SmallVec::new();
        passes.push(PassKind::Scene);
        passes.push(PassKind::Bloom);
        passes.push(PassKind::Output);
        Self {
            passes,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn passes(&self) -> &[PassKind] {
        &self.passes
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Half-resolution extent used by the bloom ping-pong buffers.
    pub fn bloom_size(&self) -> (u32, u32) {
        ((self.width / 2).max(1), (self.height / 2).max(1))
    }

    /// Returns true when buffers need to be reallocated. Zero sizes are ignored.
    pub fn set_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn bright_uniforms(&self, bloom: &BloomParams) -> PostUniforms {
        PostUniforms {
            texel: texel(self.size()),
            threshold: bloom.threshold,
            smooth_width: bloom.smooth_width,
            ..Default::default()
        }
    }

    pub fn blur_uniforms(&self, bloom: &BloomParams, horizontal: bool) -> PostUniforms {
        let spacing = bloom.tap_spacing();
        PostUniforms {
            texel: texel(self.bloom_size()),
            blur_dir: if horizontal {
                [spacing, 0.0]
            } else {
                [0.0, spacing]
            },
            ..Default::default()
        }
    }

    pub fn combine_uniforms(&self, bloom: &BloomParams) -> PostUniforms {
        PostUniforms {
            texel: texel(self.size()),
            strength: bloom.strength,
            ..Default::default()
        }
    }

    pub fn output_uniforms(&self, output: &OutputParams, surface_is_srgb: bool) -> PostUniforms {
        PostUniforms {
            texel: texel(self.size()),
            tone_mapping: output.tone_mapping.shader_code(),
            exposure: output.exposure,
            encode_srgb: if surface_is_srgb { 0.0 } else { 1.0 },
            ..Default::default()
        }
    }
}

/// Scale `width`x`height` down to fit within `max_dimension` on both axes,
/// keeping the aspect ratio. Zero inputs become 1.
pub fn fit_extent(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    let (w, h) = (width.max(1), height.max(1));
    let largest = w.max(h);
    if largest <= max_dimension {
        return (w, h);
    }
    let scale = max_dimension as f64 / largest as f64;
    let fit = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max_dimension);
    (fit(w), fit(h))
}

#[inline]
fn texel((w, h): (u32, u32)) -> [f32; 2] {
    [1.0 / w.max(1) as f32, 1.0 / h.max(1) as f32]
}
