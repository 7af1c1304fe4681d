//! Shared fixture constructors for tests.

use crate::{PickerDate, QuickDate};

pub fn date(year: u16, month: u8, day: u8) -> PickerDate {
    PickerDate::from_ymd(year, month, day).unwrap()
}

pub fn quick(year: u16, month: u8, day: u8, description: &str) -> QuickDate {
    QuickDate::new(date(year, month, day), description)
}

/// The shortcut list used across widget tests: a birthday, the Unix epoch,
/// a fixed "today", and the end of the century.
pub fn sample_quick_dates() -> Vec<QuickDate> {
    vec![
        quick(1961, 7, 13, "My birthday"),
        quick(1970, 1, 1, "epoch"),
        quick(2026, 8, 24, "today"),
        quick(2099, 12, 31, "End of the century"),
    ]
}
