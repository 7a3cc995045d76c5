use super::helpers;
use super::targets::{RenderTargets, HDR_FORMAT};
use crate::core::PostUniforms;

/// One fullscreen step: a pipeline plus the uniforms only it reads.
pub(crate) struct PostStep {
    pub(crate) label: &'static str,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: wgpu::Buffer,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) bright: PostStep,
    pub(crate) blur_h: PostStep,
    pub(crate) blur_v: PostStep,
    pub(crate) combine: PostStep,
    pub(crate) output: PostStep,
}

/// Bind groups referencing the current render targets; rebuilt on resize.
pub(crate) struct PostBindGroups {
    pub(crate) bright: wgpu::BindGroup,
    pub(crate) blur_h: wgpu::BindGroup,
    pub(crate) blur_v: wgpu::BindGroup,
    pub(crate) combine_scene: wgpu::BindGroup,
    pub(crate) combine_bloom: wgpu::BindGroup,
    pub(crate) output: wgpu::BindGroup,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_combine = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_combine"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });

    let step = |label: &'static str,
                layout: &wgpu::PipelineLayout,
                entry: &str,
                format: wgpu::TextureFormat| PostStep {
        label,
        pipeline: helpers::make_post_pipeline(device, label, layout, &shader, entry, format),
        uniforms: helpers::uniform_buffer(device, label, std::mem::size_of::<PostUniforms>()),
    };

    PostResources {
        bright: step("bright_pass", &pl_single, "fs_bright", HDR_FORMAT),
        blur_h: step("blur_h", &pl_single, "fs_blur", HDR_FORMAT),
        blur_v: step("blur_v", &pl_single, "fs_blur", HDR_FORMAT),
        combine: step("bloom_combine", &pl_combine, "fs_combine", HDR_FORMAT),
        output: step("output_pass", &pl_single, "fs_output", surface_format),
        bgl0,
        bgl1,
        sampler,
    }
}

impl PostResources {
    fn source_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        view: &wgpu::TextureView,
        uniforms: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    }

    pub(crate) fn bind_groups(
        &self,
        device: &wgpu::Device,
        targets: &RenderTargets,
    ) -> PostBindGroups {
        PostBindGroups {
            bright: self.source_group(device, "bg_bright", &targets.hdr.1, &self.bright.uniforms),
            blur_h: self.source_group(device, "bg_blur_h", &targets.bloom_a.1, &self.blur_h.uniforms),
            blur_v: self.source_group(device, "bg_blur_v", &targets.bloom_b.1, &self.blur_v.uniforms),
            combine_scene: self.source_group(
                device,
                "bg_combine_scene",
                &targets.hdr.1,
                &self.combine.uniforms,
            ),
            combine_bloom: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_combine_bloom"),
                layout: &self.bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a.1),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            }),
            output: self.source_group(
                device,
                "bg_output",
                &targets.composite.1,
                &self.output.uniforms,
            ),
        }
    }
}

pub(crate) fn write_uniforms(queue: &wgpu::Queue, step: &PostStep, uniforms: &PostUniforms) {
    queue.write_buffer(&step.uniforms, 0, bytemuck::bytes_of(uniforms));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    step: &PostStep,
    target: &wgpu::TextureView,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(step.label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(&step.pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
