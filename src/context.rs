use chrono::{DateTime, Local, NaiveDate};

use crate::calendar::{MonthCursor, MonthRef};
use crate::grid::{month_grid, GridCell};
use crate::notes::{Note, NoteId, NoteStore};

/// Shared state of the picker: the authoritative selected date, the month
/// being browsed and the note store.
///
/// `select` is the only write path for the selection; everything else
/// reads it. The shown month moves on its own through the cursor and is
/// recentered only where explicitly wired (`select_cell`, `select_today`).
pub struct Context {
    selected: NaiveDate,
    cursor: MonthCursor,
    notes: NoteStore,
    now: DateTime<Local>,
    pub notelist_index: usize,
}

impl Context {
    pub fn new(selected: NaiveDate) -> Self {
        Context {
            selected,
            cursor: MonthCursor::new(selected),
            notes: NoteStore::new(),
            now: Local::now(),
            notelist_index: 0,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn shown_month(&self) -> MonthRef {
        self.cursor.shown()
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Refreshes the cached clock; called on every tick.
    pub fn update(&mut self) {
        self.now = Local::now();
    }

    /// Replaces the selection unconditionally. Any date is selectable;
    /// the shown month stays where it is.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.notelist_index = 0;
    }

    /// Selects a grid cell. Picking a leading/trailing cell of an
    /// adjacent month also recenters the shown month on it.
    pub fn select_cell(&mut self, cell: &GridCell) {
        self.select(cell.date);
        if !cell.in_month {
            self.cursor.reset_to_selection(cell.date);
        }
    }

    /// Jumps to today: selects today's date and recenters the shown
    /// month on it. Use `reset_shown` for a recenter without moving the
    /// selection.
    pub fn select_today(&mut self) {
        let today = self.today();
        self.select(today);
        self.cursor.reset_to_selection(today);
    }

    pub fn navigate_months(&mut self, delta: i32) {
        self.cursor.navigate(delta);
    }

    pub fn reset_shown(&mut self) {
        self.cursor.reset_to_selection(self.selected);
    }

    /// The cells of the shown month, recomputed from the current state.
    pub fn grid(&self) -> Vec<GridCell> {
        month_grid(self.cursor.shown(), self.selected)
    }

    /// Adds a note for the selected day. Blank text adds nothing.
    pub fn add_note(&mut self, description: &str) -> Option<NoteId> {
        self.notes.add(description, self.selected)
    }

    pub fn remove_note(&mut self, id: NoteId) {
        self.notes.remove(id);
        let count = self.visible_notes().len();
        self.notelist_index = self.notelist_index.min(count.saturating_sub(1));
    }

    /// The selected day's notes, most recently added first.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.notes.notes_of_day(&self.selected).collect()
    }
}
