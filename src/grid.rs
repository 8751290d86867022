use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::MonthRef;

pub const WEEK_COLUMNS: usize = 7;

/// One day slot of a rendered month grid. Leading and trailing cells carry
/// real dates of the adjacent months, flagged with `in_month = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub selected: bool,
    pub in_month: bool,
}

/// Computes the full set of cells for one month, as whole Monday-aligned
/// weeks covering every day of `month` plus the leading/trailing days
/// needed to fill the first and last week.
///
/// `selected` marks at most one cell; a selection outside the grid's range
/// is simply not shown, never clamped into it.
pub fn month_grid(month: MonthRef, selected: NaiveDate) -> Vec<GridCell> {
    let first = month.first_day();
    let leading = first.weekday().num_days_from_monday() as i64;
    let num_days = month.num_days() as i64;
    let week_rows = (num_days + leading + 6) / 7;

    // Five or six rows for every month, except a 28-day February starting
    // on Monday which fits exactly in four.
    debug_assert!((4..=6).contains(&week_rows));

    (0..week_rows * WEEK_COLUMNS as i64)
        .map(|idx| {
            let date = first + Duration::days(idx - leading);
            GridCell {
                date,
                selected: date == selected,
                in_month: month.contains(&date),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn grid_of(month: Month, year: i32) -> Vec<GridCell> {
        // Selection far outside the grid
        month_grid(MonthRef::new(month, year), date(1970, 1, 1))
    }

    #[test]
    fn whole_weeks_only() {
        for &(month, year) in &[
            (Month::January, 2022),
            (Month::February, 2022),
            (Month::August, 2022),
            (Month::October, 2022),
            (Month::December, 2023),
            (Month::February, 2024),
        ] {
            let cells = grid_of(month, year);
            assert_eq!(cells.len() % WEEK_COLUMNS, 0);
            assert!(matches!(cells.len() / WEEK_COLUMNS, 5 | 6));
        }
    }

    #[test]
    fn first_of_month_lands_after_leading_offset() {
        // March 2022 starts on a Tuesday
        let cells = grid_of(Month::March, 2022);

        assert_eq!(cells[1].date, date(2022, 3, 1));
        assert!(cells[1].in_month);
        assert!(!cells[0].in_month);
    }

    #[test]
    fn month_starting_monday_has_no_leading_cells() {
        let cells = grid_of(Month::August, 2022);

        assert_eq!(cells[0].date, date(2022, 8, 1));
        assert!(cells[0].in_month);
        assert_eq!(cells.len(), 5 * WEEK_COLUMNS);
    }

    #[test]
    fn four_week_february_fits_exactly() {
        // Feb 2021: 28 days beginning on a Monday, no out-of-month cells
        let cells = grid_of(Month::February, 2021);

        assert_eq!(cells.len(), 4 * WEEK_COLUMNS);
        assert!(cells.iter().all(|cell| cell.in_month));
    }

    #[test]
    fn leading_and_trailing_cells_are_adjacent_month_dates() {
        let cells = grid_of(Month::March, 2022);

        assert_eq!(cells.first().unwrap().date, date(2022, 2, 28));
        assert_eq!(cells.last().unwrap().date, date(2022, 4, 3));
        assert!(!cells.last().unwrap().in_month);
    }

    #[test]
    fn leap_year_february() {
        let cells = grid_of(Month::February, 2024);

        assert_eq!(cells.len(), 5 * WEEK_COLUMNS);
        assert!(cells
            .iter()
            .any(|cell| cell.date == date(2024, 2, 29) && cell.in_month));

        let cells = grid_of(Month::February, 2023);
        assert!(!cells
            .iter()
            .any(|cell| cell.in_month && cell.date == date(2023, 2, 29)));
    }

    #[test]
    fn exactly_one_cell_selected_when_visible() {
        let cells = month_grid(MonthRef::new(Month::March, 2022), date(2022, 3, 15));
        assert_eq!(cells.iter().filter(|cell| cell.selected).count(), 1);

        // A leading cell of the adjacent month is selectable too
        let cells = month_grid(MonthRef::new(Month::March, 2022), date(2022, 2, 28));
        let hit: Vec<_> = cells.iter().filter(|cell| cell.selected).collect();
        assert_eq!(hit.len(), 1);
        assert!(!hit[0].in_month);
    }

    #[test]
    fn selection_outside_the_grid_is_not_shown() {
        let cells = month_grid(MonthRef::new(Month::March, 2022), date(2000, 1, 1));
        assert_eq!(cells.iter().filter(|cell| cell.selected).count(), 0);
    }
}
