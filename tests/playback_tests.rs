// Host-side tests for the play/pause state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod playback {
    include!("../src/core/playback.rs");
}

use playback::*;

fn exactly_one_visible(c: &Controls) -> bool {
    c.is_visible(Widget::Play) != c.is_visible(Widget::Pause)
}

#[test]
fn initial_state() {
    let c = Controls::default();
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.visible(), Widget::Play);
    assert!(exactly_one_visible(&c));
}

#[test]
fn widgets_stay_mutually_exclusive() {
    let mut c = Controls::default();
    for step in 0..6 {
        if step % 2 == 0 {
            c.pause_clicked();
            assert_eq!(c.state(), PlaybackState::Paused);
            assert_eq!(c.visible(), Widget::Play);
        } else {
            c.play_clicked();
            assert_eq!(c.state(), PlaybackState::Playing);
            assert_eq!(c.visible(), Widget::Pause);
        }
        assert!(exactly_one_visible(&c));
    }
}

#[test]
fn repeated_clicks_are_stable() {
    let mut c = Controls::default();
    c.play_clicked();
    c.play_clicked();
    assert!(c.is_playing());
    assert_eq!(c.visible(), Widget::Pause);
}

#[test]
fn halt_behaves_like_pause() {
    let mut c = Controls::default();
    c.play_clicked();
    c.halt();
    assert!(!c.is_playing());
    assert_eq!(c.visible(), Widget::Play);
}
