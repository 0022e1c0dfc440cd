//! Platform-independent state and content. Nothing in here touches web-sys,
//! so the host test suite can include these files directly.

pub mod constants;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod error;
pub mod hover;
pub mod markup;
pub mod menu;
pub mod particles;
pub mod scroll;

pub use constants::*;
pub use contact::{ContactError, ContactSink, ContactSubmission, LoggingSink};
pub use cursor::{CursorConfig, CursorState, CursorStyle};
pub use error::{CoreError, CoreResult};
pub use hover::{is_interactive, ElementInfo, INTERACTIVE_MARKER};
pub use menu::MenuState;
pub use particles::{Particle, ParticleColor, ParticleConfig, ParticleField};
pub use scroll::{is_scrolled, scroll_progress};
