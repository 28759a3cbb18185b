// app/state.rs - Display State
//
// Everything the single screen shows that can change, and the events that
// change it. Kept free of any UI toolkit types so transitions can be tested
// directly.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::greeting::Greeting;
use crate::location::{Location, COUNTRIES};

pub const DEFAULT_GREETING: &str = "Hello World!";
pub const NO_LOCATION: &str = "No location selected";
pub const INVALID_LOCATION: &str = "Invalid Location";

/// Which way the user chooses a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontEnd {
    /// Pick from the fixed list of countries
    #[default]
    Countries,
    /// Type a timezone identifier
    FreeText,
}

/// Result of the last time lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeAtLocation {
    #[default]
    NotQueried,
    Time(String),
    Invalid,
}

impl TimeAtLocation {
    /// Text shown to the user
    pub fn message(&self) -> &str {
        match self {
            TimeAtLocation::NotQueried => NO_LOCATION,
            TimeAtLocation::Time(message) => message,
            TimeAtLocation::Invalid => INVALID_LOCATION,
        }
    }
}

/// User actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleGreeting,
    ToggleDropdown,
    DismissDropdown,
    /// Index into [`COUNTRIES`]
    SelectCountry(usize),
    EditLocation(String),
    Compute,
}

/// Main display state
/// Single source of truth for the screen
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub front_end: FrontEnd,
    pub greeting: String,
    pub show_image: bool,
    pub location: Option<Location>,
    /// Contents of the text field (free text front end)
    pub location_input: String,
    pub time_at_location: TimeAtLocation,
    pub dropdown_open: bool,
}

impl DisplayState {
    pub fn new(front_end: FrontEnd) -> Self {
        Self {
            front_end,
            greeting: DEFAULT_GREETING.to_string(),
            show_image: false,
            location: None,
            location_input: String::new(),
            time_at_location: TimeAtLocation::NotQueried,
            dropdown_open: false,
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ToggleGreeting => self.toggle_greeting(),
            Event::ToggleDropdown => {
                if self.front_end == FrontEnd::Countries {
                    self.dropdown_open = !self.dropdown_open;
                }
            }
            Event::DismissDropdown => self.dropdown_open = false,
            Event::SelectCountry(index) => self.select_country(index),
            Event::EditLocation(text) => self.edit_location(text),
            Event::Compute => self.compute(),
        }
    }

    fn toggle_greeting(&mut self) {
        self.greeting = format!("Iced: {}", Greeting::new().greet());
        self.show_image = !self.show_image;
    }

    /// Picking a country shows its time straight away
    fn select_country(&mut self, index: usize) {
        let Some(country) = COUNTRIES.get(index) else {
            return;
        };
        self.location = Some(Location::Country(country));
        self.dropdown_open = false;
        self.compute();
    }

    fn edit_location(&mut self, text: String) {
        self.location = Some(Location::Zone(text.clone()));
        self.location_input = text;
    }

    /// Recompute the time at the current location from the system clock
    pub fn compute(&mut self) {
        self.time_at_location = match self.location.as_ref().and_then(clock::time_at) {
            Some(message) => TimeAtLocation::Time(message),
            None => TimeAtLocation::Invalid,
        };
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(FrontEnd::default())
    }
}
