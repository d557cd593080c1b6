//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use keycalc_core::keyboard::KeyCommand;
use keycalc_core::{Calculator, DisplayView};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use crate::display::render_display;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::history::render_history;
use crate::keymap::{map_key, KeyAction};
use crate::keypad::{button_at, render_keypad};
use crate::messages::TuiMessage;

/// Screen regions of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    /// Present only while the history panel is shown.
    pub history: Option<Rect>,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct CalcApp {
    calculator: Calculator,
    /// Last rendered display.
    pub view: DisplayView,
    /// Whether the history panel is visible.
    pub show_history: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl CalcApp {
    /// Create a new TUI app around a calculator.
    #[must_use]
    pub fn new(calculator: Calculator) -> Self {
        let view = calculator.view();
        Self {
            calculator,
            view,
            show_history: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// The calculator driven by this app.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Click { column, row } => self.handle_click(column, row),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.run_command(command),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Press the keypad button under a terminal cell, if any.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let layout = Self::compute_layout(self.screen_area(), self.show_history);
        if let Some(command) = button_at(layout.keypad, column, row).and_then(|b| b.command()) {
            self.run_command(command);
        }
    }

    fn run_command(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Input(event) => self.view = self.calculator.apply(event),
            KeyCommand::ToggleHistory => {
                self.show_history = !self.show_history;
                debug!(show_history = self.show_history, "history panel toggled");
            }
        }
    }

    fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Compute the screen layout.
    ///
    /// The calculator column takes 60% of the width when the history panel
    /// is shown, the full width otherwise.
    #[must_use]
    pub fn compute_layout(area: Rect, show_history: bool) -> ScreenLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let (calc_area, history) = if show_history {
            let main = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(outer[1]);
            (main[0], Some(main[1]))
        } else {
            (outer[1], None)
        };

        let calc = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // display
                Constraint::Min(5),    // keypad
            ])
            .split(calc_area);

        ScreenLayout {
            header: outer[0],
            display: calc[0],
            keypad: calc[1],
            history,
            footer: outer[2],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area(), self.show_history);
        let history = self.calculator.history();

        render_header(frame, layout.header, history.len(), self.show_history);
        render_display(frame, layout.display, &self.view);
        render_keypad(frame, layout.keypad, self.calculator.selected_operator());
        if let Some(area) = layout.history {
            render_history(frame, area, history);
        }
        render_footer(frame, layout.footer, self.show_history);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Translate a crossterm event into a message.
    #[must_use]
    pub fn message_for(event: &Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(*key) {
                KeyAction::Quit => Some(TuiMessage::Quit),
                action => Some(TuiMessage::KeyPress(action)),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiMessage::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            Event::Resize(width, height) => Some(TuiMessage::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let tick_rate = Duration::from_millis(250);
        let result = self.event_loop(&mut terminal, tick_rate);

        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(tick_rate)? {
                Self::message_for(&event::read()?)
            } else {
                Some(TuiMessage::Tick)
            };
            if let Some(msg) = msg {
                self.handle_message(msg);
            }
        }
    }
}
