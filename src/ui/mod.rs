pub mod app;
pub mod calendar_window;
pub mod notelist_window;

pub use app::App;
pub use calendar_window::MonthPane;
pub use notelist_window::{NoteWindow, NoteWindowBehaviour};

use unsegen::base::{Color, StyleModifier};

#[derive(Clone, Copy, Debug)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub adjacent_day_style: StyleModifier,
    pub focus_day_style: StyleModifier,
    pub focus_day_char: Option<char>,
    pub today_day_char: Option<char>,
    pub month_header_style: StyleModifier,
    pub weekday_header_style: StyleModifier,
    pub note_style: StyleModifier,
    pub focus_note_style: StyleModifier,
    pub empty_list_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            adjacent_day_style: StyleModifier::new().fg_color(Color::LightBlack),
            focus_day_style: StyleModifier::new().bg_color(Color::Blue),
            focus_day_char: None,
            today_day_char: Some('*'),
            month_header_style: StyleModifier::new().fg_color(Color::Yellow),
            weekday_header_style: StyleModifier::new().fg_color(Color::Yellow),
            note_style: StyleModifier::default(),
            focus_note_style: StyleModifier::new().invert(true),
            empty_list_style: StyleModifier::new().fg_color(Color::Red),
        }
    }
}
