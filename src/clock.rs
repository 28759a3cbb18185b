// clock.rs - Date and Time Formatting
//
// Reads the system clock and renders it for display. Every call reads the
// clock again; nothing is cached.

use jiff::{tz::TimeZone, Timestamp, Zoned};

use crate::location::Location;

/// Today's date in the local timezone, as `YYYY-MM-DD`
pub fn today() -> String {
    let now = Zoned::now();
    now.date().to_string()
}

/// The calendar date of `instant` in `zone`, as `YYYY-MM-DD`
pub fn today_in(instant: Timestamp, zone: &TimeZone) -> String {
    instant.to_zoned(zone.clone()).date().to_string()
}

/// The current time at `location`, or `None` if its timezone is unknown
pub fn time_at(location: &Location) -> Option<String> {
    time_at_instant(location, Timestamp::now())
}

/// Like [`time_at`], for a given instant
///
/// Fields are not zero padded: 09:05:03 renders as `9:5:3`.
pub fn time_at_instant(location: &Location, instant: Timestamp) -> Option<String> {
    let zone = TimeZone::get(location.zone_id()).ok()?;
    let time = instant.to_zoned(zone).time();

    Some(format!(
        "The time in {} is {}:{}:{}",
        location.name(),
        time.hour(),
        time.minute(),
        time.second(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::COUNTRIES;

    fn instant(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn country(name: &str) -> Location {
        let country = COUNTRIES.iter().find(|c| c.name == name).unwrap();
        Location::Country(country)
    }

    #[test]
    fn test_time_in_country() {
        let noon = instant("2024-01-15T12:34:56Z");
        assert_eq!(
            time_at_instant(&country("Japan"), noon).as_deref(),
            Some("The time in Japan is 21:34:56")
        );
        assert_eq!(
            time_at_instant(&country("France"), noon).as_deref(),
            Some("The time in France is 13:34:56")
        );
    }

    #[test]
    fn test_no_zero_padding() {
        let early = instant("2024-01-15T00:05:03Z");
        assert_eq!(
            time_at_instant(&country("Japan"), early).as_deref(),
            Some("The time in Japan is 9:5:3")
        );
        assert_eq!(
            time_at_instant(&Location::Zone("UTC".into()), early).as_deref(),
            Some("The time in UTC is 0:5:3")
        );
    }

    #[test]
    fn test_typed_zone() {
        let location = Location::Zone("America/New_York".into());
        // EDT, UTC-4
        assert_eq!(
            time_at_instant(&location, instant("2024-07-01T16:00:00Z")).as_deref(),
            Some("The time in America/New_York is 12:0:0")
        );
    }

    #[test]
    fn test_every_country_resolves() {
        for c in COUNTRIES {
            let message = time_at(&Location::Country(c)).unwrap();
            assert!(message.starts_with(&format!("The time in {} is ", c.name)));
        }
    }

    #[test]
    fn test_unknown_zone() {
        for bad in ["", "   ", "Not/AZone", "Europe/", "../../etc/passwd", "Paris"] {
            assert_eq!(time_at(&Location::Zone(bad.into())), None, "{bad:?}");
        }
    }

    #[test]
    fn test_today_is_date_only() {
        let today = today();
        assert_eq!(today.len(), 10, "{today}");
        assert!(today.parse::<jiff::civil::Date>().is_ok());
        assert!(!today.contains('T'));
    }

    #[test]
    fn test_today_in_zone() {
        let late = instant("2024-01-15T23:30:00Z");
        let tokyo = TimeZone::get("Asia/Tokyo").unwrap();
        assert_eq!(today_in(late, &tokyo), "2024-01-16");
        assert_eq!(today_in(late, &TimeZone::UTC), "2024-01-15");

        let mexico = TimeZone::get("America/Mexico_City").unwrap();
        assert_eq!(today_in(instant("2024-03-01T03:00:00Z"), &mexico), "2024-02-29");
    }
}
