pub mod pointer;
pub mod scroll;

pub use pointer::{target_chain, wire_cursor_handlers};
pub use scroll::wire_scroll;
