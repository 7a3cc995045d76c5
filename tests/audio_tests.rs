// Host-side tests for frequency averaging and playback position bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod audio {
    include!("../src/core/audio.rs");
}

use audio::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn average_of_empty_bins_is_silence() {
    assert_eq!(average_frequency(&[]), 0.0);
}

#[test]
fn average_is_arithmetic_mean() {
    assert_eq!(average_frequency(&[0, 255]), 127.5);
    assert_eq!(average_frequency(&[10; 16]), 10.0);
    assert_eq!(average_frequency(&[255; 16]), 255.0);
    let bins: Vec<u8> = (0..16).collect();
    assert_eq!(average_frequency(&bins), 7.5);
}

#[test]
fn asset_status_readiness() {
    assert!(!AssetStatus::Loading.is_ready());
    assert!(!AssetStatus::Failed("404".into()).is_ready());
    assert!(AssetStatus::Ready { duration_sec: 3.0 }.is_ready());
}

#[test]
fn pause_preserves_position() {
    let mut clock = PlaybackClock::default();
    assert!(!clock.is_running());
    assert!(approx(clock.start(10.0, 100.0), 0.0));
    assert!(clock.is_running());
    assert!(approx(clock.position(12.5), 2.5));

    clock.pause(12.5);
    assert!(!clock.is_running());
    assert!(approx(clock.position(50.0), 2.5));

    assert!(approx(clock.start(30.0, 100.0), 2.5));
    clock.pause(40.0);
    assert!(approx(clock.position(41.0), 12.5));
}

#[test]
fn start_while_running_reports_current_offset() {
    let mut clock = PlaybackClock::default();
    clock.start(0.0, 100.0);
    assert!(approx(clock.start(4.0, 100.0), 4.0));
    clock.pause(6.0);
    assert!(approx(clock.position(6.0), 6.0));
}

#[test]
fn finished_track_restarts_from_zero() {
    let mut clock = PlaybackClock::default();
    clock.start(0.0, 5.0);
    clock.pause(6.0);
    assert!(approx(clock.start(7.0, 5.0), 0.0));
    assert!(approx(clock.position(8.0), 1.0));
}

#[test]
fn pause_when_stopped_is_noop() {
    let mut clock = PlaybackClock::default();
    clock.pause(3.0);
    assert!(approx(clock.position(3.0), 0.0));
}

#[test]
fn play_before_load_is_ignored() {
    let mut t = Transport::default();
    assert_eq!(t.request_play(1.0), PlayDecision::NotReady);
    assert!(!t.is_running());
    assert_eq!(t.failure(), None);
}

#[test]
fn play_after_failed_load_reports_reason() {
    let mut t = Transport::default();
    t.fail("HTTP 404".into());
    assert_eq!(
        t.request_play(1.0),
        PlayDecision::Unavailable("HTTP 404".into())
    );
    assert!(!t.is_running());
    assert_eq!(t.failure(), Some("HTTP 404"));
}

#[test]
fn play_while_running_does_not_restart() {
    let mut t = Transport::default();
    t.attach(60.0);
    assert_eq!(t.request_play(2.0), PlayDecision::Start(0.0));
    assert_eq!(t.request_play(3.0), PlayDecision::AlreadyRunning);
    assert!(approx(t.position(5.0), 3.0));
}

#[test]
fn pause_then_play_resumes_from_position() {
    let mut t = Transport::default();
    t.attach(60.0);
    t.request_play(0.0);
    assert!(t.pause(4.0));
    assert!(!t.pause(5.0));
    assert_eq!(t.request_play(10.0), PlayDecision::Start(4.0));
}

#[test]
fn play_after_track_end_wraps_to_start() {
    let mut t = Transport::default();
    t.attach(5.0);
    t.request_play(0.0);
    t.pause(7.0);
    assert_eq!(t.request_play(8.0), PlayDecision::Start(0.0));
    assert!(t.status().is_ready());
}
