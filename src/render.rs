use crate::core::{
    fit_extent, icosphere_wireframe, BloomParams, CameraRig, FrameRenderer, OutputParams, PassKind,
    PostChainPlan, ShaderUniforms, VizError, MESH_DETAIL, MESH_RADIUS, MSAA_SAMPLES,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys as web;

mod helpers;
mod mesh;
mod post;
mod targets;

pub use mesh::ShaderSources;
use mesh::MeshResources;
use post::{PostBindGroups, PostResources};
use targets::{RenderTargets, HDR_FORMAT};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    surface_is_srgb: bool,
    device_lost: Arc<AtomicBool>,
    max_dimension: u32,

    plan: PostChainPlan,
    bloom: BloomParams,
    output: OutputParams,

    mesh: MeshResources,
    targets: RenderTargets,
    post: PostResources,
    bind_groups: PostBindGroups,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        size: (u32, u32),
        shaders: &ShaderSources,
        bloom: BloomParams,
        output: OutputParams,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = fit_extent(size.0, size.1, max_dimension);

        device.on_uncaptured_error(Box::new(|e| {
            log::error!("[gpu] uncaptured error: {}", e);
        }));
        let device_lost = Arc::new(AtomicBool::new(false));
        {
            let flag = device_lost.clone();
            device.set_device_lost_callback(move |reason, msg| {
                log::error!("[gpu] device lost ({:?}): {}", reason, msg);
                flag.store(true, Ordering::SeqCst);
            });
        }

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if adapter
            .get_texture_format_features(HDR_FORMAT)
            .flags
            .sample_count_supported(MSAA_SAMPLES)
        {
            MSAA_SAMPLES
        } else {
            1
        };

        let wireframe = icosphere_wireframe(MESH_RADIUS, MESH_DETAIL);
        log::info!(
            "[gpu] {:?} {}x{} msaa={} mesh: {} vertices, {} edges",
            format,
            width,
            height,
            sample_count,
            wireframe.vertices.len(),
            wireframe.edge_count()
        );

        // External shader text: surface compile errors instead of panicking.
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let mesh = mesh::create_mesh_resources(&device, shaders, &wireframe, sample_count);
        if let Some(e) = device.pop_error_scope().await {
            return Err(VizError::Gpu(format!("mesh shader rejected: {}", e)).into());
        }

        let plan = PostChainPlan::new(width, height);
        let targets = RenderTargets::new(&device, plan.size(), plan.bloom_size(), sample_count);
        let post = post::create_post_resources(&device, format);
        let bind_groups = post.bind_groups(&device, &targets);

        let state = Self {
            surface,
            device,
            queue,
            surface_is_srgb: format.is_srgb(),
            config,
            device_lost,
            max_dimension,
            plan,
            bloom,
            output,
            mesh,
            targets,
            post,
            bind_groups,
        };
        state.write_post_uniforms();
        Ok(state)
    }

    fn write_post_uniforms(&self) {
        post::write_uniforms(
            &self.queue,
            &self.post.bright,
            &self.plan.bright_uniforms(&self.bloom),
        );
        post::write_uniforms(
            &self.queue,
            &self.post.blur_h,
            &self.plan.blur_uniforms(&self.bloom, true),
        );
        post::write_uniforms(
            &self.queue,
            &self.post.blur_v,
            &self.plan.blur_uniforms(&self.bloom, false),
        );
        post::write_uniforms(
            &self.queue,
            &self.post.combine,
            &self.plan.combine_uniforms(&self.bloom),
        );
        post::write_uniforms(
            &self.queue,
            &self.post.output,
            &self.plan.output_uniforms(&self.output, self.surface_is_srgb),
        );
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn encode_scene(&self, encoder: &mut wgpu::CommandEncoder) {
        let (color, resolve) = self.targets.scene_color();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: resolve,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.targets.depth.1,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.mesh.pipeline);
        rpass.set_bind_group(0, &self.mesh.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }

    fn encode_bloom(&self, encoder: &mut wgpu::CommandEncoder) {
        let bg = &self.bind_groups;
        // bright pass: hdr -> bloom_a
        post::blit(encoder, &self.post.bright, &self.targets.bloom_a.1, &bg.bright, None);
        // blur horizontal: bloom_a -> bloom_b
        post::blit(encoder, &self.post.blur_h, &self.targets.bloom_b.1, &bg.blur_h, None);
        // blur vertical: bloom_b -> bloom_a
        post::blit(encoder, &self.post.blur_v, &self.targets.bloom_a.1, &bg.blur_v, None);
        // combine: hdr + bloom_a -> composite
        post::blit(
            encoder,
            &self.post.combine,
            &self.targets.composite.1,
            &bg.combine_scene,
            Some(&bg.combine_bloom),
        );
    }

    fn encode_output(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        post::blit(encoder, &self.post.output, view, &self.bind_groups.output, None);
    }
}

impl FrameRenderer for GpuState {
    fn render(&mut self, camera: &CameraRig, uniforms: &ShaderUniforms) -> Result<(), VizError> {
        if self.device_lost.load(Ordering::SeqCst) {
            return Err(VizError::ContextLost("device lost".into()));
        }
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Err(VizError::FrameSkipped("surface reconfigured".into()));
            }
            Err(wgpu::SurfaceError::Timeout) => {
                return Err(VizError::FrameSkipped("surface timeout".into()));
            }
            Err(e) => return Err(VizError::ContextLost(format!("{:?}", e))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let packed = uniforms.pack(camera.view_proj());
        self.queue
            .write_buffer(&self.mesh.uniform_buffer, 0, bytemuck::bytes_of(&packed));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        for pass in self.plan.passes() {
            match pass {
                PassKind::Scene => self.encode_scene(&mut encoder),
                PassKind::Bloom => self.encode_bloom(&mut encoder),
                PassKind::Output => self.encode_output(&mut encoder, &view),
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = fit_extent(width, height, self.max_dimension);
        if !self.plan.set_size(width, height) {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();

        self.targets
            .recreate(&self.device, self.plan.size(), self.plan.bloom_size());
        self.bind_groups = self.post.bind_groups(&self.device, &self.targets);
        self.write_post_uniforms();
        log::info!("[gpu] resized to {}x{}", width, height);
    }
}
