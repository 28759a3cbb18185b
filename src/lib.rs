//! WorldClock - Date and Timezone Library
//!
//! This library provides the parts of the clock that don't depend on the UI:
//! time formatting, locations, the greeting and the display state machine.

// Only include modules that don't depend on iced
pub mod app;
pub mod clock;
pub mod config;
pub mod greeting;
pub mod location;

// Re-export commonly used types
pub use app::{DisplayState, Event, FrontEnd, TimeAtLocation};
pub use location::{Country, Location, COUNTRIES};
