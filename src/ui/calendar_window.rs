use chrono::{Datelike, NaiveDate};
use std::fmt::{self, Display, Write};
use unsegen::base::*;
use unsegen::widget::*;

use super::Theme;
use crate::calendar::MonthRef;
use crate::context::Context;
use crate::grid::{GridCell, WEEK_COLUMNS};

struct DayCell<'a> {
    cell: &'a GridCell,
    is_today: bool,
    theme: &'a Theme,
}

impl DayCell<'_> {
    const CELL_WIDTH: usize = 4;
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_focus = if self.cell.selected {
            self.theme.focus_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_focus, self.cell.date.day())
    }
}

/// The shown month as a grid of day cells, one line per week.
///
/// Leading and trailing cells are real dates of the adjacent months and
/// stay pickable, unlike the in-month cells they are drawn dimmed.
pub struct MonthPane<'a> {
    month: MonthRef,
    cells: Vec<GridCell>,
    today: NaiveDate,
    theme: &'a Theme,
}

impl<'a> MonthPane<'a> {
    const MAX_WEEK_ROWS: usize = 6;
    const HEADER_ROWS: usize = 2;

    const HEADER: &'static [&'static str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    pub fn new(context: &'a Context, theme: &'a Theme) -> Self {
        MonthPane {
            month: context.shown_month(),
            cells: context.grid(),
            today: context.today(),
            theme,
        }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(WEEK_COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + Self::MAX_WEEK_ROWS),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let width = WEEK_COLUMNS * DayCell::CELL_WIDTH;
        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        cursor.set_style_modifier(self.theme.month_header_style);
        writeln!(&mut cursor, "{:^width$}", self.month.to_string(), width = width).unwrap();

        cursor.set_style_modifier(self.theme.weekday_header_style);
        for &head in Self::HEADER {
            write!(
                &mut cursor,
                "{:>width$}",
                head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }
        writeln!(&mut cursor).unwrap();

        for week in self.cells.chunks(WEEK_COLUMNS) {
            for cell in week {
                let style = if cell.selected {
                    self.theme.focus_day_style
                } else if !cell.in_month {
                    self.theme.adjacent_day_style
                } else {
                    self.theme.day_style
                };

                cursor.set_style_modifier(style);
                write!(
                    &mut cursor,
                    "{}",
                    DayCell {
                        cell,
                        is_today: cell.date == self.today,
                        theme: self.theme,
                    }
                )
                .unwrap();
            }

            cursor.set_style_modifier(StyleModifier::default());
            writeln!(&mut cursor).unwrap();
        }
    }
}
