use chrono::{NaiveDate, NaiveDateTime};

/// Build a wall-clock timestamp for mock records. Out-of-range input yields
/// the epoch rather than panicking.
pub fn wall_clock(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// `03/07/2025 09:00 AM`
pub fn format_day_first(at: &NaiveDateTime) -> String {
    at.format("%d/%m/%Y %I:%M %p").to_string()
}

/// `2025-01-09 14:30`
pub fn format_iso_minutes(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// `14:30`
pub fn format_clock(at: &NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_clock, format_day_first, format_iso_minutes, wall_clock};

    #[test]
    fn formats_day_first_with_meridiem() {
        assert_eq!(format_day_first(&wall_clock(2025, 7, 3, 9, 0)), "03/07/2025 09:00 AM");
        assert_eq!(format_day_first(&wall_clock(2025, 7, 2, 14, 0)), "02/07/2025 02:00 PM");
    }

    #[test]
    fn formats_iso_minutes() {
        assert_eq!(format_iso_minutes(&wall_clock(2025, 1, 9, 14, 30)), "2025-01-09 14:30");
    }

    #[test]
    fn formats_clock() {
        assert_eq!(format_clock(&wall_clock(2025, 1, 9, 14, 35)), "14:35");
    }

    #[test]
    fn invalid_dates_fall_back_to_epoch() {
        assert_eq!(format_iso_minutes(&wall_clock(2025, 2, 30, 0, 0)), "1970-01-01 00:00");
    }
}
