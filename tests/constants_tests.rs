// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(CAMERA_EASE_X > 0.0 && CAMERA_EASE_X <= 1.0);
    assert!(CAMERA_EASE_Y > 0.0 && CAMERA_EASE_Y <= 1.0);
    // Y follows faster than X
    assert!(CAMERA_EASE_Y > CAMERA_EASE_X);
    assert!(POINTER_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_range_is_valid() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // The start position sits well outside the mesh.
    let [x, y, z] = CAMERA_START;
    assert!((x * x + y * y + z * z).sqrt() > MESH_RADIUS * 2.0);
    // Effective field of view after wrapping stays below 180 degrees.
    let wrapped = CAMERA_FOV_DEG % 360.0;
    assert!(wrapped > 0.0 && wrapped < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_fft_size_is_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert_eq!(ANALYSER_FFT_SIZE / 2, 16);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_and_color_defaults_in_range() {
    for v in [BLOOM_THRESHOLD, BLOOM_STRENGTH, BLOOM_RADIUS] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(BLOOM_SMOOTH_WIDTH > 0.0);
    for c in [UNIFORM_RED, UNIFORM_GREEN, UNIFORM_BLUE] {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        VERTEX_SHADER_ID,
        FRAGMENT_SHADER_ID,
        STATUS_OVERLAY_ID,
        PLAY_BUTTON_ID,
        PAUSE_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(AUDIO_ASSET_PATH.starts_with("./assets/"));
}
