// app/mod.rs - Application State
//
// This module contains the display state that is independent of the UI toolkit.
// The iced views only read this state and send events back to it.

mod state;

pub use state::*;
