//! Platform collaborators
//!
//! - Input events queued between frames
//! - Frame clock and frame pacing

pub mod input;
pub mod time;

pub use input::{EventQueue, InputEvent};
pub use time::{FrameClock, FramePacer};
