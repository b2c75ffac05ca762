//! Configuration structures for assembly runs.
//!
//! A [`Settings`] value is the complete configuration snapshot for one run:
//! where the inputs live, which platform to target, and which execution mode
//! is active. Nothing in the assembler reads process state directly.

mod builder;
mod core;
mod layout;
mod platform;

pub use builder::SettingsBuilder;
pub use self::core::{ExecutionMode, Settings};
pub use layout::Layout;
pub use platform::PlatformId;
