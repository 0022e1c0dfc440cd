// Host-side tests for the cursor follower state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use constants::*;
use cursor::*;
use error::CoreError;

#[test]
fn pointer_move_updates_lead_dot_immediately() {
    let mut c = CursorState::new();
    c.on_pointer_move(120.0, 45.0);
    assert_eq!(c.pointer(), glam::Vec2::new(120.0, 45.0));
    // Trail has not moved until the next tick
    assert_eq!(c.trail(), glam::Vec2::ZERO);
}

#[test]
fn tick_moves_trail_by_smoothing_fraction() {
    let mut c = CursorState::new();
    c.on_pointer_move(100.0, 200.0);
    c.tick();
    assert!((c.trail().x - 15.0).abs() < 1e-4);
    assert!((c.trail().y - 30.0).abs() < 1e-4);
}

#[test]
fn trail_converges_geometrically_without_overshoot() {
    let mut c = CursorState::new();
    let target = glam::Vec2::new(500.0, 300.0);
    c.on_pointer_move(target.x, target.y);
    let initial = c.trail_error();

    let mut prev = c.trail();
    for n in 1..=60 {
        c.tick();
        let bound = initial * (1.0 - TRAIL_SMOOTHING).powi(n);
        assert!(
            c.trail_error() <= bound * (1.0 + 1e-4) + 1e-4,
            "tick {n}: error {} exceeds bound {}",
            c.trail_error(),
            bound
        );
        // Monotone approach on both axes, never past the target
        assert!(c.trail().x >= prev.x && c.trail().x <= target.x);
        assert!(c.trail().y >= prev.y && c.trail().y <= target.y);
        prev = c.trail();
    }
}

#[test]
fn trail_reaches_one_percent_of_target_after_29_ticks() {
    let mut c = CursorState::new();
    c.on_pointer_move(500.0, 300.0);
    let initial = c.trail_error();

    for _ in 0..10 {
        c.tick();
    }
    // 0.85^10 ≈ 0.197 of the starting offset remains after ten frames
    let after_ten = c.trail_error() / initial;
    assert!((after_ten - 0.85f32.powi(10)).abs() < 1e-3);

    for _ in 10..29 {
        c.tick();
    }
    assert!(c.trail_error() <= 0.01 * initial);
}

#[test]
fn trail_follows_a_moving_pointer() {
    let mut c = CursorState::new();
    for i in 0..50 {
        c.on_pointer_move(i as f32 * 10.0, 0.0);
        c.tick();
    }
    assert!(c.trail().x > 0.0);
    assert!(c.trail().x < c.pointer().x);
}

#[test]
fn hover_style_matches_visual_states() {
    let mut c = CursorState::new();
    assert_eq!(
        c.style(),
        CursorStyle {
            dot_scale: 1.0,
            ring_scale: 1.0,
            ring_opacity: 0.4
        }
    );
    c.on_pointer_over(true);
    assert!(c.hovering());
    assert_eq!(
        c.style(),
        CursorStyle {
            dot_scale: 2.5,
            ring_scale: 2.0,
            ring_opacity: 0.8
        }
    );
    c.on_pointer_over(false);
    assert_eq!(c.style().dot_scale, 1.0);
}

#[test]
fn config_rejects_smoothing_outside_open_unit_interval() {
    for bad in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
        let cfg = CursorConfig {
            smoothing: bad,
            ..CursorConfig::default()
        };
        match CursorState::with_config(cfg) {
            Err(CoreError::InvalidSmoothing(_)) => {}
            other => panic!("smoothing {bad} accepted: {:?}", other.map(|_| ())),
        }
    }
    assert!(CursorState::with_config(CursorConfig::default()).is_ok());
}

#[test]
fn custom_config_drives_both_visual_states() {
    let cfg = CursorConfig {
        dot_scale_hover: 3.0,
        dot_scale_rest: 0.5,
        ring_scale_hover: 1.5,
        ring_scale_rest: 0.75,
        ring_opacity_hover: 1.0,
        ring_opacity_rest: 0.2,
        ..CursorConfig::default()
    };
    let mut c = CursorState::with_config(cfg).expect("valid config");
    assert_eq!(
        c.style(),
        CursorStyle {
            dot_scale: 0.5,
            ring_scale: 0.75,
            ring_opacity: 0.2
        }
    );
    c.on_pointer_over(true);
    assert_eq!(
        c.style(),
        CursorStyle {
            dot_scale: 3.0,
            ring_scale: 1.5,
            ring_opacity: 1.0
        }
    );
}

#[test]
fn transform_centres_then_scales() {
    assert_eq!(
        centered_scale_transform(2.5),
        "translate(-50%, -50%) scale(2.5)"
    );
    assert_eq!(
        centered_scale_transform(1.0),
        "translate(-50%, -50%) scale(1)"
    );
}
