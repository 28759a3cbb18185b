// constants.rs - Application-wide Constants
//
// Centralized dimensions and sizes used by the views.

/// Main window dimensions
pub mod window {
    /// Minimum window width
    pub const MIN_WIDTH: u32 = 360;
    /// Minimum window height
    pub const MIN_HEIGHT: u32 = 420;
    /// Card corner radius
    pub const RADIUS: f32 = 12.0;
}

/// Font sizes
pub mod text {
    /// Today's date heading
    pub const DATE: u16 = 24;
    /// Time at location message
    pub const TIME: u16 = 20;
    /// Buttons and inputs
    pub const BODY: u16 = 14;
}

/// Spacing between sections
pub mod spacing {
    pub const PADDING: u16 = 10;
    pub const SECTION: f32 = 20.0;
    pub const ITEM: u16 = 6;
}

/// The image shown by the greeting toggle
pub mod image {
    pub const SIZE: f32 = 128.0;
}
