use std::fmt::Write;
use unsegen::base::*;
use unsegen::input::{OperationResult, Scrollable};
use unsegen::widget::*;

use super::Theme;
use crate::context::Context;

/// The selected day's notes, most recently added first, with a movable
/// highlight for note removal.
pub struct NoteWindow<'a> {
    context: &'a Context,
    theme: &'a Theme,
}

impl<'a> NoteWindow<'a> {
    pub fn new(context: &'a Context, theme: &'a Theme) -> Self {
        NoteWindow { context, theme }
    }
}

impl Widget for NoteWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(10),
            height: RowDemand::at_least(10),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(self.theme.month_header_style);
        writeln!(
            &mut cursor,
            "{}",
            self.context.selected_date().format("%B %-d")
        )
        .unwrap();
        cursor.set_style_modifier(self.theme.note_style);

        let notes = self.context.visible_notes();

        if notes.is_empty() {
            cursor.apply_style_modifier(self.theme.empty_list_style);
            write!(&mut cursor, "No notes").unwrap();
            return;
        }

        for (idx, note) in notes.iter().enumerate() {
            let saved_style = cursor.get_style_modifier();

            if idx == self.context.notelist_index {
                cursor.apply_style_modifier(self.theme.focus_note_style);
            }

            if let Err(err) = write!(&mut cursor, "{}", note.description()) {
                log::warn!("Error while writing note: {}", err);
            }

            cursor.fill_and_wrap_line();

            cursor.set_style_modifier(saved_style);
        }
    }
}

/// Moves the note-list highlight, bounded by the number of visible notes.
pub struct NoteWindowBehaviour<'a>(pub &'a mut Context, pub usize);

impl Scrollable for NoteWindowBehaviour<'_> {
    fn scroll_backwards(&mut self) -> OperationResult {
        if self.0.notelist_index > 0 {
            self.0.notelist_index -= 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn scroll_forwards(&mut self) -> OperationResult {
        if self.0.notelist_index + 1 < self.1 {
            self.0.notelist_index += 1;
            Ok(())
        } else {
            Err(())
        }
    }
}
