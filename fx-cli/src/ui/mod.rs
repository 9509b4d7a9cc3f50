//! Converter UI.
//!
//! The UI is a pure state machine (`state`) driven by parsed user commands
//! (`command`) and rendered to text (`render`). The async driver that runs
//! effects lives in `crate::app`.

pub mod command;
pub mod render;
pub mod state;

pub use command::Command;
pub use state::{Completed, Effect, Event, UiState, update};
