// Host-side tests for post-processing chain bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod post {
    include!("../src/core/post.rs");
}

use post::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn passes_run_scene_then_bloom_then_output() {
    let plan = PostChainPlan::new(800, 600);
    assert_eq!(
        plan.passes(),
        &[PassKind::Scene, PassKind::Bloom, PassKind::Output]
    );
}

#[test]
fn new_clamps_zero_size() {
    let plan = PostChainPlan::new(0, 0);
    assert_eq!(plan.size(), (1, 1));
    assert_eq!(plan.bloom_size(), (1, 1));
}

#[test]
fn set_size_is_idempotent() {
    let mut plan = PostChainPlan::new(800, 600);
    assert!(!plan.set_size(800, 600));
    assert!(plan.set_size(1024, 768));
    assert!(!plan.set_size(1024, 768));
    assert!(!plan.set_size(1024, 768));
    assert_eq!(plan.size(), (1024, 768));
    assert_eq!(plan.passes().len(), 3);
}

#[test]
fn set_size_ignores_zero_dimensions() {
    let mut plan = PostChainPlan::new(800, 600);
    assert!(!plan.set_size(0, 600));
    assert!(!plan.set_size(800, 0));
    assert_eq!(plan.size(), (800, 600));
}

#[test]
fn bloom_runs_at_half_resolution() {
    let plan = PostChainPlan::new(801, 600);
    assert_eq!(plan.bloom_size(), (400, 300));
}

#[test]
fn default_bloom_parameters() {
    let b = BloomParams::default();
    assert!(approx(b.threshold, 0.5));
    assert!(approx(b.strength, 0.5));
    assert!(approx(b.radius, 0.8));
    assert!(approx(b.smooth_width, 0.01));
    assert!(approx(b.tap_spacing(), 2.6));
}

#[test]
fn tap_spacing_clamps_radius() {
    let mut b = BloomParams::default();
    b.radius = -1.0;
    assert!(approx(b.tap_spacing(), 1.0));
    b.radius = 5.0;
    assert!(approx(b.tap_spacing(), 3.0));
}

#[test]
fn step_uniforms_carry_their_own_values() {
    let plan = PostChainPlan::new(800, 400);
    let bloom = BloomParams::default();

    let bright = plan.bright_uniforms(&bloom);
    assert!(approx(bright.threshold, 0.5));
    assert!(approx(bright.texel[0], 1.0 / 800.0));

    let h = plan.blur_uniforms(&bloom, true);
    let v = plan.blur_uniforms(&bloom, false);
    assert!(approx(h.blur_dir[0], 2.6) && h.blur_dir[1] == 0.0);
    assert!(v.blur_dir[0] == 0.0 && approx(v.blur_dir[1], 2.6));
    assert!(approx(h.texel[0], 1.0 / 400.0));
    assert!(approx(h.texel[1], 1.0 / 200.0));

    let combine = plan.combine_uniforms(&bloom);
    assert!(approx(combine.strength, 0.5));
}

#[test]
fn output_encodes_srgb_only_for_linear_surfaces() {
    let plan = PostChainPlan::new(800, 600);
    let out = OutputParams::default();
    assert_eq!(out.tone_mapping, ToneMapping::None);
    assert_eq!(plan.output_uniforms(&out, true).encode_srgb, 0.0);
    assert_eq!(plan.output_uniforms(&out, false).encode_srgb, 1.0);

    let aces = OutputParams {
        tone_mapping: ToneMapping::Aces,
        exposure: 1.5,
    };
    let u = plan.output_uniforms(&aces, true);
    assert_eq!(u.tone_mapping, 1.0);
    assert!(approx(u.exposure, 1.5));
}

#[test]
fn uniform_block_layout() {
    assert_eq!(std::mem::size_of::<PostUniforms>(), 48);
    assert_eq!(std::mem::size_of::<PostUniforms>() % 16, 0);
}

#[test]
fn extent_within_limit_is_unchanged() {
    assert_eq!(fit_extent(1920, 1080, 8192), (1920, 1080));
    assert_eq!(fit_extent(0, 0, 8192), (1, 1));
}

#[test]
fn oversized_extent_scales_down_keeping_aspect() {
    let (w, h) = fit_extent(10240, 2880, 8192);
    assert_eq!(w, 8192);
    assert_eq!(h, 2304);

    let (w, h) = fit_extent(3000, 20000, 8192);
    assert_eq!(h, 8192);
    assert!(w <= 8192 && w >= 1);
    assert_eq!(w, (3000.0_f64 * 8192.0 / 20000.0).round() as u32);
}

#[test]
fn extreme_aspect_never_collapses_to_zero() {
    assert_eq!(fit_extent(100_000, 1, 8192), (8192, 1));
}
