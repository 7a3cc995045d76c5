// Host-side tests for the mesh shader uniforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod uniforms {
    include!("../src/core/uniforms.rs");
}
mod clock {
    include!("../src/core/clock.rs");
}

use clock::ElapsedClock;
use glam::Mat4;
use uniforms::*;

#[test]
fn default_colors_are_static_red() {
    let u = ShaderUniforms::default();
    assert_eq!((u.red, u.green, u.blue), (1.0, 0.1, 0.1));
    assert_eq!(u.time, 0.0);
    assert_eq!(u.frequency, 0.0);
}

#[test]
fn refresh_overwrites_frequency_and_keeps_time_monotonic() {
    let mut u = ShaderUniforms::default();
    u.refresh(1.0, 80.0);
    assert_eq!((u.time, u.frequency), (1.0, 80.0));
    u.refresh(0.5, 20.0);
    assert_eq!((u.time, u.frequency), (1.0, 20.0));
    u.refresh(f32::NAN, f32::INFINITY);
    assert_eq!((u.time, u.frequency), (1.0, 0.0));
    assert_eq!((u.red, u.green, u.blue), (1.0, 0.1, 0.1));
}

#[test]
fn packed_block_matches_gpu_layout() {
    assert_eq!(std::mem::size_of::<MeshUniforms>(), 96);
    let mut u = ShaderUniforms::default();
    u.refresh(2.0, 64.0);
    let packed = u.pack(Mat4::IDENTITY);
    assert_eq!(packed.view_proj, Mat4::IDENTITY.to_cols_array_2d());
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&packed));
    assert_eq!(&floats[16..21], &[2.0, 64.0, 1.0, 0.1, 0.1]);
}

#[test]
fn elapsed_clock_never_decreases() {
    let mut clock = ElapsedClock::new();
    let mut last = clock.elapsed_sec();
    assert!(last >= 0.0);
    for _ in 0..100 {
        let now = clock.elapsed_sec();
        assert!(now >= last);
        last = now;
    }
}
