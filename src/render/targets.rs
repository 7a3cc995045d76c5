use super::helpers;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen targets for the pass chain.
///
/// - `msaa_*` is the multisampled scene color, resolved into `hdr_*`
///   (absent when multisampling is off).
/// - `depth_*` matches the scene sample count.
/// - `bloom_*` are half-res ping-pong buffers for bright-pass and blur.
/// - `composite_*` holds scene plus bloom before the output pass.
pub(crate) struct RenderTargets {
    pub(crate) sample_count: u32,
    pub(crate) msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
    pub(crate) depth: (wgpu::Texture, wgpu::TextureView),
    pub(crate) hdr: (wgpu::Texture, wgpu::TextureView),
    pub(crate) bloom_a: (wgpu::Texture, wgpu::TextureView),
    pub(crate) bloom_b: (wgpu::Texture, wgpu::TextureView),
    pub(crate) composite: (wgpu::Texture, wgpu::TextureView),
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        size: (u32, u32),
        bloom_size: (u32, u32),
        sample_count: u32,
    ) -> Self {
        let sampled =
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (w, h) = size;
        let (bw, bh) = bloom_size;
        let msaa = (sample_count > 1).then(|| {
            helpers::create_render_texture(
                device,
                "scene_msaa",
                w,
                h,
                HDR_FORMAT,
                sample_count,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            )
        });
        Self {
            sample_count,
            msaa,
            depth: helpers::create_render_texture(
                device,
                "scene_depth",
                w,
                h,
                DEPTH_FORMAT,
                sample_count,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            ),
            hdr: helpers::create_render_texture(device, "hdr_tex", w, h, HDR_FORMAT, 1, sampled),
            bloom_a: helpers::create_render_texture(device, "bloom_a", bw, bh, HDR_FORMAT, 1, sampled),
            bloom_b: helpers::create_render_texture(device, "bloom_b", bw, bh, HDR_FORMAT, 1, sampled),
            composite: helpers::create_render_texture(
                device,
                "composite",
                w,
                h,
                HDR_FORMAT,
                1,
                sampled,
            ),
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        size: (u32, u32),
        bloom_size: (u32, u32),
    ) {
        *self = RenderTargets::new(device, size, bloom_size, self.sample_count);
    }

    /// Color attachment and resolve target for the scene pass.
    pub(crate) fn scene_color(&self) -> (&wgpu::TextureView, Option<&wgpu::TextureView>) {
        match &self.msaa {
            Some((_, msaa_view)) => (msaa_view, Some(&self.hdr.1)),
            None => (&self.hdr.1, None),
        }
    }
}
