use chrono::Duration;

use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::context::Context;
use crate::events::{Dispatcher, Event};

use super::{Mode, MonthPane, NoteWindow, NoteWindowBehaviour, Theme};

use unsegen::base::{GraphemeCluster, Terminal};
use unsegen::input::{Behavior, EditBehavior, Input, Key, Scrollable};
use unsegen::widget::builtin::PromptLine;
use unsegen::widget::*;

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    theme: Theme,
    mode: Mode,
    note_input: PromptLine,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, context: Context) -> App<'a> {
        App {
            config,
            context,
            theme: Theme::default(),
            mode: Mode::Normal,
            note_input: PromptLine::with_prompt("> ".to_owned()),
            quit: false,
        }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        let spacer = " ".with_demand(|_| Demand2D {
            width: ColDemand::exact(1),
            height: RowDemand::exact(1),
        });

        let mut layout = HLayout::new()
            .separator(GraphemeCluster::try_from(' ').unwrap())
            .widget(spacer);
        if let Mode::Insert = self.mode {
            layout = layout.widget(self.note_input.as_widget());
        }

        layout
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(
                HLayout::new()
                    .widget(MonthPane::new(&self.context, &self.theme))
                    .widget(NoteWindow::new(&self.context, &self.theme)),
            )
            .widget(self.bottom_bar())
    }

    pub fn render(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        while !self.quit {
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => self.context.update(),
                    Event::Input(input) => self.handle_input(input),
                }
            }

            self.render(&mut term);
        }

        Ok(())
    }

    fn handle_input(&mut self, input: Input) {
        if input.matches(Key::Esc) {
            self.mode = Mode::Normal;
            return;
        }

        match self.mode {
            Mode::Normal => {
                if let unsegen::input::Event::Key(key) = input.event {
                    let result = match self.config.key_map.get(&key) {
                        Some(&cmd) => self.handle_cmd(cmd),
                        None => Err(CmdError::new(format!("No binding for key {:?}", key))),
                    };

                    if let Err(err) = result {
                        log::debug!("{}", err);
                    }
                }
            }
            Mode::Insert => {
                input
                    .chain(
                        EditBehavior::new(&mut self.note_input)
                            .delete_forwards_on(Key::Delete)
                            .delete_backwards_on(Key::Backspace)
                            .left_on(Key::Left)
                            .right_on(Key::Right),
                    )
                    .chain(NoteEntry {
                        context: &mut self.context,
                        mode: &mut self.mode,
                        input: &mut self.note_input,
                    })
                    .finish();
            }
        }
    }

    fn handle_cmd(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Noop => {}
            Cmd::NextDay => self.step_selection(Duration::days(1)),
            Cmd::PrevDay => self.step_selection(Duration::days(-1)),
            Cmd::NextWeek => self.step_selection(Duration::weeks(1)),
            Cmd::PrevWeek => self.step_selection(Duration::weeks(-1)),
            Cmd::NextMonth => self.context.navigate_months(1),
            Cmd::PrevMonth => self.context.navigate_months(-1),
            Cmd::Today => self.context.select_today(),
            Cmd::NextNote => {
                let count = self.context.visible_notes().len();
                let _ = NoteWindowBehaviour(&mut self.context, count).scroll_forwards();
            }
            Cmd::PrevNote => {
                let count = self.context.visible_notes().len();
                let _ = NoteWindowBehaviour(&mut self.context, count).scroll_backwards();
            }
            Cmd::RemoveNote => self.remove_highlighted_note(),
            Cmd::EnterInsert => self.mode = Mode::Insert,
            Cmd::Exit => self.quit = true,
        }

        Ok(Cmd::Noop)
    }

    /// Moves the selection by whole days. Stepping onto a leading or
    /// trailing cell of the grid recenters the shown month on it, like
    /// picking that cell directly; a step that leaves the grid entirely
    /// falls back to following the selection.
    fn step_selection(&mut self, delta: Duration) {
        let target = self.context.selected_date() + delta;

        match self
            .context
            .grid()
            .into_iter()
            .find(|cell| cell.date == target)
        {
            Some(cell) => self.context.select_cell(&cell),
            None => {
                self.context.select(target);
                self.context.reset_shown();
            }
        }
    }

    fn remove_highlighted_note(&mut self) {
        let id = self
            .context
            .visible_notes()
            .get(self.context.notelist_index)
            .map(|note| note.id());

        if let Some(id) = id {
            self.context.remove_note(id);
        }
    }
}

/// Commits the prompt line as a note for the selected day on Enter.
/// Blank text commits nothing, matching a submit that does nothing.
struct NoteEntry<'a> {
    context: &'a mut Context,
    mode: &'a mut Mode,
    input: &'a mut PromptLine,
}

impl Behavior for NoteEntry<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let unsegen::input::Event::Key(Key::Char('\n')) = input.event {
            let line = self.input.finish_line().to_owned();
            if self.context.add_note(&line).is_none() {
                log::debug!("Discarding blank note input");
            }
            *self.mode = Mode::Normal;
            None
        } else {
            Some(input)
        }
    }
}
