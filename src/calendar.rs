use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt;

/// Number of days in `month` of `year`, leap years included.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap())
    .num_days() as u32
}

/// A calendar month of a specific year, with no day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    month: Month,
    year: i32,
}

impl MonthRef {
    pub fn new(month: Month, year: i32) -> Self {
        MonthRef { month, year }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1).unwrap()
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.month, self.year)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Shifts by `delta` months, carrying over year boundaries in either
    /// direction. Not bounded; any delta is valid.
    pub fn offset(self, delta: i32) -> Self {
        let months = self.year * 12 + self.month.number_from_month() as i32 - 1 + delta;

        MonthRef {
            month: Month::from_u32(months.rem_euclid(12) as u32 + 1).unwrap(),
            year: months.div_euclid(12),
        }
    }
}

impl<T: Datelike> From<T> for MonthRef {
    fn from(d: T) -> Self {
        MonthRef::new(Month::from_u32(d.month()).unwrap(), d.year())
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// The month currently shown in the grid.
///
/// Deliberately separate from the selected date: browsing months does not
/// move the selection, only which month's cells are rendered.
pub struct MonthCursor {
    shown: MonthRef,
}

impl MonthCursor {
    pub fn new(selected: NaiveDate) -> Self {
        MonthCursor {
            shown: selected.into(),
        }
    }

    pub fn shown(&self) -> MonthRef {
        self.shown
    }

    pub fn navigate(&mut self, delta: i32) {
        self.shown = self.shown.offset(delta);
    }

    pub fn reset_to_selection(&mut self, selected: NaiveDate) {
        self.shown = selected.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(&Month::January, 2022), 31);
        assert_eq!(days_of_month(&Month::April, 2022), 30);
        assert_eq!(days_of_month(&Month::December, 2022), 31);
        assert_eq!(days_of_month(&Month::February, 2023), 28);
        assert_eq!(days_of_month(&Month::February, 2024), 29);
        assert_eq!(days_of_month(&Month::February, 1900), 28);
        assert_eq!(days_of_month(&Month::February, 2000), 29);
    }

    #[test]
    fn offset_carries_years() {
        let jan = MonthRef::new(Month::January, 2024);

        assert_eq!(jan.offset(1), MonthRef::new(Month::February, 2024));
        assert_eq!(jan.offset(-1), MonthRef::new(Month::December, 2023));
        assert_eq!(jan.offset(12), MonthRef::new(Month::January, 2025));
        assert_eq!(jan.offset(25), MonthRef::new(Month::February, 2026));
        assert_eq!(jan.offset(-13), MonthRef::new(Month::December, 2022));
        assert_eq!(jan.offset(-240), MonthRef::new(Month::January, 2004));
    }

    #[test]
    fn twelve_single_steps_make_a_year() {
        let mut cursor = MonthCursor::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        for _ in 0..12 {
            cursor.navigate(1);
        }

        assert_eq!(cursor.shown(), MonthRef::new(Month::January, 2025));
    }

    #[test]
    fn reset_follows_the_selection() {
        let mut cursor = MonthCursor::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        cursor.navigate(-7);

        cursor.reset_to_selection(NaiveDate::from_ymd_opt(2022, 10, 31).unwrap());

        assert_eq!(cursor.shown(), MonthRef::new(Month::October, 2022));
    }

    #[test]
    fn from_datelike_drops_the_day() {
        let month: MonthRef = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap().into();
        assert_eq!(month, MonthRef::new(Month::August, 2026));
        assert!(month.contains(&NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()));
        assert!(!month.contains(&NaiveDate::from_ymd_opt(2026, 7, 31).unwrap()));
    }
}
