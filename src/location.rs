// location.rs - Locations the clock can show the time for
//
// A location is either one of the fixed countries offered by the dropdown
// or a raw timezone identifier typed by the user.

use std::fmt;

/// A named country with the timezone used to represent it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// IANA timezone identifier, e.g. "Europe/Paris"
    pub zone: &'static str,
    pub flag: &'static str,
}

impl Country {
    /// Dropdown label, flag first
    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

/// Countries offered by the dropdown, in display order
pub const COUNTRIES: &[Country] = &[
    Country { name: "Japan", zone: "Asia/Tokyo", flag: "🇯🇵" },
    Country { name: "France", zone: "Europe/Paris", flag: "🇫🇷" },
    Country { name: "Mexico", zone: "America/Mexico_City", flag: "🇲🇽" },
    Country { name: "Indonesia", zone: "Asia/Jakarta", flag: "🇮🇩" },
    Country { name: "Egypt", zone: "Africa/Cairo", flag: "🇪🇬" },
];

/// Where the user wants to know the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Picked from [`COUNTRIES`]
    Country(&'static Country),
    /// Typed by hand. Held verbatim so the message echoes what the user wrote.
    Zone(String),
}

impl Location {
    /// Name used in the "The time in ..." message
    pub fn name(&self) -> &str {
        match self {
            Location::Country(country) => country.name,
            Location::Zone(text) => text,
        }
    }

    /// Timezone identifier to look up
    pub fn zone_id(&self) -> &str {
        match self {
            Location::Country(country) => country.zone,
            Location::Zone(text) => text.trim(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_table() {
        let names: Vec<_> = COUNTRIES.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Japan", "France", "Mexico", "Indonesia", "Egypt"]);
        assert!(COUNTRIES.iter().all(|c| c.zone.contains('/')));
    }

    #[test]
    fn test_label() {
        assert_eq!(COUNTRIES[1].label(), "🇫🇷 France");
    }

    #[test]
    fn test_country_location() {
        let location = Location::Country(&COUNTRIES[0]);
        assert_eq!(location.name(), "Japan");
        assert_eq!(location.zone_id(), "Asia/Tokyo");
        assert_eq!(location.to_string(), "Japan");
    }

    #[test]
    fn test_typed_location_is_trimmed_for_lookup_only() {
        let location = Location::Zone("  Europe/Paris ".into());
        assert_eq!(location.zone_id(), "Europe/Paris");
        assert_eq!(location.name(), "  Europe/Paris ");
    }
}
