// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factor_is_strictly_inside_unit_interval() {
    // Outside (0, 1) the trail would either freeze or overshoot the pointer
    assert!(TRAIL_SMOOTHING > 0.0 && TRAIL_SMOOTHING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_state_is_larger_and_brighter_than_rest() {
    assert!(DOT_SCALE_HOVER > DOT_SCALE_REST);
    assert!(RING_SCALE_HOVER > RING_SCALE_REST);
    assert!(RING_OPACITY_HOVER > RING_OPACITY_REST);
    assert!(RING_OPACITY_HOVER <= 1.0 && RING_OPACITY_REST > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered_and_positive() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_MIN <= PARTICLE_SIZE_MAX);
    assert!(PARTICLE_SPEED_MIN > 0.0 && PARTICLE_SPEED_MIN <= PARTICLE_SPEED_MAX);
    assert!(PARTICLE_OPACITY_MIN > 0.0 && PARTICLE_OPACITY_MAX <= 1.0);
    assert!(PARTICLE_OPACITY_MIN <= PARTICLE_OPACITY_MAX);
    assert!(PARTICLE_SPAWN_DEPTH > 0.0);
    assert!(PARTICLE_WRAP_MARGIN > 0.0);
    // Largest particle must be fully off-screen before it wraps
    assert!(PARTICLE_WRAP_MARGIN > PARTICLE_SIZE_MAX);
}

#[test]
fn palette_is_css_hex() {
    for hex in [GOLD_HEX, FLAMINGO_HEX] {
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn dom_event_names_are_lowercase() {
    for name in [EVENT_MOUSEMOVE, EVENT_MOUSEOVER, EVENT_RESIZE, EVENT_SCROLL] {
        assert_eq!(name, name.to_ascii_lowercase());
    }
    assert!(!APP_ROOT_ID.is_empty());
}
