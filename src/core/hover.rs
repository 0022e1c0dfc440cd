/// Class name that opts a non-link element into the enlarged cursor state.
pub const INTERACTIVE_MARKER: &str = "interactive";

/// Snapshot of one element on the path from a hover target to the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementInfo {
    pub tag: String,
    pub interactive_marker: bool,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>, interactive_marker: bool) -> Self {
        Self {
            tag: tag.into(),
            interactive_marker,
        }
    }

    #[inline]
    pub fn is_link_or_button(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a") || self.tag.eq_ignore_ascii_case("button")
    }
}

/// `chain[0]` is the hovered element, followed by its ancestors nearest first.
/// An empty chain (no element target) is never interactive.
pub fn is_interactive(chain: &[ElementInfo]) -> bool {
    match chain.first() {
        None => false,
        Some(target) => {
            target.interactive_marker || chain.iter().any(ElementInfo::is_link_or_button)
        }
    }
}
