// Host-side tests for hover classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod hover {
    include!("../src/core/hover.rs");
}

use hover::*;

fn el(tag: &str) -> ElementInfo {
    ElementInfo::new(tag, false)
}

#[test]
fn links_and_buttons_are_interactive() {
    assert!(is_interactive(&[el("A"), el("BODY")]));
    assert!(is_interactive(&[el("BUTTON"), el("FORM"), el("BODY")]));
    // Tag names compare case-insensitively (SVG and XHTML report lowercase)
    assert!(is_interactive(&[el("a")]));
    assert!(is_interactive(&[el("button")]));
}

#[test]
fn descendants_of_links_and_buttons_are_interactive() {
    let chain = [el("SPAN"), el("svg"), el("A"), el("NAV"), el("BODY"), el("HTML")];
    assert!(is_interactive(&chain));
    let chain = [el("IMG"), el("BUTTON"), el("DIV")];
    assert!(is_interactive(&chain));
}

#[test]
fn interactive_marker_on_target_counts() {
    let chain = [ElementInfo::new("DIV", true), el("SECTION"), el("BODY")];
    assert!(is_interactive(&chain));
}

#[test]
fn marker_on_ancestor_only_does_not_count() {
    let chain = [el("P"), ElementInfo::new("DIV", true), el("BODY")];
    assert!(!is_interactive(&chain));
}

#[test]
fn plain_content_is_not_interactive() {
    assert!(!is_interactive(&[el("P"), el("SECTION"), el("MAIN"), el("BODY")]));
    assert!(!is_interactive(&[el("ABBR")]));
    assert!(!is_interactive(&[el("BUTTONS")]));
}

#[test]
fn missing_target_defaults_to_false() {
    assert!(!is_interactive(&[]));
}
