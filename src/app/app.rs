use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};

use crate::app::{Converter, Theme, ui};

pub struct App {
    converter: Converter,
    theme: Theme,
    show_from_picker: bool,
    show_to_picker: bool,
    from_picker_state: ListState,
    to_picker_state: ListState,
}

impl App {
    pub fn new(converter: Converter, theme: Theme) -> Self {
        Self {
            converter,
            theme,
            show_from_picker: false,
            show_to_picker: false,
            from_picker_state: ListState::default(),
            to_picker_state: ListState::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.converter,
                    self.theme,
                    self.show_from_picker,
                    self.show_to_picker,
                    &mut self.from_picker_state,
                    &mut self.to_picker_state,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.show_from_picker || self.show_to_picker {
                    self.handle_picker_key(key.code);
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::F(2) => self.open_from_picker(),
                    KeyCode::F(3) => self.open_to_picker(),
                    KeyCode::F(8) => self.theme = self.theme.toggled(),
                    KeyCode::Backspace => self.converter.backspace(),
                    KeyCode::Char(c) => self.converter.push_char(c),
                    _ => {}
                }
            }
        }
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        let count = self.converter.currencies().len();

        match code {
            KeyCode::Esc => {
                self.show_from_picker = false;
                self.show_to_picker = false;
            }
            KeyCode::Down => {
                if count == 0 {
                    return;
                }
                let state = self.active_picker_state();
                let i = match state.selected() {
                    Some(i) => {
                        if i >= count - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                state.select(Some(i));
            }
            KeyCode::Up => {
                if count == 0 {
                    return;
                }
                let state = self.active_picker_state();
                let i = match state.selected() {
                    Some(i) => {
                        if i == 0 {
                            count - 1
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                state.select(Some(i));
            }
            KeyCode::Enter => {
                let selected = self.active_picker_state().selected();
                let code = selected
                    .and_then(|i| self.converter.currencies().get(i))
                    .map(|currency| currency.code().clone());

                if let Some(code) = code {
                    if self.show_from_picker {
                        self.converter.set_from(code);
                    } else {
                        self.converter.set_to(code);
                    }
                    self.show_from_picker = false;
                    self.show_to_picker = false;
                }
            }
            _ => {}
        }
    }

    fn active_picker_state(&mut self) -> &mut ListState {
        if self.show_from_picker {
            &mut self.from_picker_state
        } else {
            &mut self.to_picker_state
        }
    }

    fn open_from_picker(&mut self) {
        let preselect = self
            .converter
            .position_of(self.converter.from())
            .or_else(|| (!self.converter.currencies().is_empty()).then_some(0));
        self.from_picker_state.select(preselect);
        self.show_from_picker = true;
    }

    fn open_to_picker(&mut self) {
        let preselect = self
            .converter
            .position_of(self.converter.to())
            .or_else(|| (!self.converter.currencies().is_empty()).then_some(0));
        self.to_picker_state.select(preselect);
        self.show_to_picker = true;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;
    use rust_decimal_macros::dec;

    use super::App;
    use crate::app::{Converter, Theme};
    use crate::models::{Currency, RateTable};

    // Entry order: USD, EUR, then the appended PLN base.
    fn sample_app() -> App {
        let table = RateTable::from_entries(
            String::from("A"),
            NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
            vec![
                Currency::new(
                    String::from("USD"),
                    String::from("dolar amerykański"),
                    dec!(4.00),
                ),
                Currency::new(String::from("EUR"), String::from("euro"), dec!(4.30)),
            ],
        );
        App::new(Converter::new(table, "PLN", "EUR"), Theme::Dark)
    }

    #[test]
    fn opening_a_picker_preselects_the_current_code() {
        let mut app = sample_app();

        app.open_from_picker();
        assert!(app.show_from_picker);
        assert_eq!(app.from_picker_state.selected(), Some(2));

        app.handle_picker_key(KeyCode::Esc);
        app.open_to_picker();
        assert!(app.show_to_picker);
        assert_eq!(app.to_picker_state.selected(), Some(1));
    }

    #[test]
    fn selection_wraps_around_both_ends() {
        let mut app = sample_app();
        app.open_from_picker();

        app.handle_picker_key(KeyCode::Down);
        assert_eq!(app.from_picker_state.selected(), Some(0));

        app.handle_picker_key(KeyCode::Up);
        assert_eq!(app.from_picker_state.selected(), Some(2));
    }

    #[test]
    fn enter_assigns_the_selection_and_closes() {
        let mut app = sample_app();
        app.open_from_picker();

        app.handle_picker_key(KeyCode::Down);
        app.handle_picker_key(KeyCode::Enter);

        assert_eq!(app.converter.from(), "USD");
        assert_eq!(app.converter.to(), "EUR");
        assert!(!app.show_from_picker);
    }

    #[test]
    fn esc_closes_without_changing_the_selection() {
        let mut app = sample_app();
        app.open_to_picker();

        app.handle_picker_key(KeyCode::Down);
        app.handle_picker_key(KeyCode::Esc);

        assert_eq!(app.converter.to(), "EUR");
        assert!(!app.show_to_picker);
    }

    #[test]
    fn empty_table_leaves_the_picker_inert() {
        let mut app = App::new(Converter::default(), Theme::Dark);
        app.open_from_picker();

        assert!(app.show_from_picker);
        assert_eq!(app.from_picker_state.selected(), None);

        app.handle_picker_key(KeyCode::Down);
        assert_eq!(app.from_picker_state.selected(), None);

        app.handle_picker_key(KeyCode::Enter);
        assert_eq!(app.converter.from(), "PLN");
        assert!(app.show_from_picker);

        app.handle_picker_key(KeyCode::Esc);
        assert!(!app.show_from_picker);
    }
}
