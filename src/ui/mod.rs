// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Presentation layer.
//!
//! Provides the plain-text report used by the command line and a
//! ratatui-based terminal page with Tonic, Accidental and Mode selectors
//! above the derived scale and chords.

pub mod report;
mod selector;

pub use report::{render, ReportStyle};
pub use selector::SelectorWidget;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use crate::music::{mode_info, Mode, ModeInfo, TheoryError};

/// Tonic letters offered by the page
pub const TONICS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Accidentals offered by the page
pub const ACCIDENTALS: [&str; 3] = ["", "#", "b"];

const ACCIDENTAL_LABELS: [&str; 3] = ["none", "#", "b"];

/// Which selector has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tonic,
    Accidental,
    Mode,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Tonic => Field::Accidental,
            Field::Accidental => Field::Mode,
            Field::Mode => Field::Tonic,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Tonic => Field::Mode,
            Field::Accidental => Field::Tonic,
            Field::Mode => Field::Accidental,
        }
    }
}

/// Key event result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Focus moved to another selector
    Focus(Field),
    /// A selection changed
    Changed,
    /// Help overlay toggled
    ToggleHelp,
}

/// Selector positions and page flags
#[derive(Debug, Clone)]
pub struct UiState {
    /// Index into [`TONICS`]
    pub tonic: usize,
    /// Index into [`ACCIDENTALS`]
    pub accidental: usize,
    /// Index into [`Mode::ALL`]
    pub mode: usize,
    /// Focused selector
    pub focus: Field,
    /// Help text visible
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tonic: 0,
            accidental: 0,
            mode: 0,
            focus: Field::Tonic,
            show_help: false,
            status_message: None,
            status_time: None,
        }
    }
}

impl UiState {
    /// Tonic text built from the letter and accidental, e.g. "F#"
    pub fn tonic_text(&self) -> String {
        format!("{}{}", TONICS[self.tonic], ACCIDENTALS[self.accidental])
    }

    /// Selected mode
    pub fn mode(&self) -> Mode {
        Mode::ALL[self.mode]
    }

    /// Derive the record for the current selection
    pub fn info(&self) -> Result<ModeInfo, TheoryError> {
        mode_info(&self.tonic_text(), self.mode().name())
    }

    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        match (code, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            (KeyCode::Right, _) | (KeyCode::Tab, _) => {
                self.focus = self.focus.next();
                KeyAction::Focus(self.focus)
            }
            (KeyCode::Left, _) | (KeyCode::BackTab, _) => {
                self.focus = self.focus.previous();
                KeyAction::Focus(self.focus)
            }

            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.step(1);
                KeyAction::Changed
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.step(-1);
                KeyAction::Changed
            }

            (KeyCode::Char('?'), _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.show_help = !self.show_help;
                KeyAction::ToggleHelp
            }

            _ => KeyAction::None,
        }
    }

    /// Move the focused selector by `delta`, wrapping around
    fn step(&mut self, delta: isize) {
        let (index, len) = match self.focus {
            Field::Tonic => (&mut self.tonic, TONICS.len()),
            Field::Accidental => (&mut self.accidental, ACCIDENTALS.len()),
            Field::Mode => (&mut self.mode, Mode::ALL.len()),
        };
        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
    }
}

/// Terminal UI application
pub struct App {
    state: UiState,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    frame_rate: u32,
    running: bool,
}

impl App {
    /// Enter raw mode and the alternate screen
    pub fn new(state: UiState) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state,
            terminal,
            frame_rate: 30,
            running: true,
        })
    }

    /// Create app with default selections
    pub fn with_default_state() -> io::Result<Self> {
        Self::new(UiState::default())
    }

    /// Stop the app
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Draw and handle keys until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        while self.running {
            self.state.clear_expired_status();
            self.draw()?;

            if let Some(Event::Key(key)) = self.poll_event()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.state.handle_key(key.code, key.modifiers) {
                    KeyAction::Quit => self.quit(),
                    KeyAction::Changed => {
                        let tonic = self.state.tonic_text();
                        let mode = self.state.mode();
                        debug!(tonic = %tonic, mode = %mode, "selection changed");
                        self.state.set_status(format!(" Showing {} {}", tonic, mode));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Poll for events with timeout
    pub fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.frame_rate as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI
    pub fn draw(&mut self) -> io::Result<()> {
        let state = self.state.clone();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // Title
                    Constraint::Length(9),  // Selectors
                    Constraint::Min(8),     // Output
                    Constraint::Length(1),  // Status bar
                ])
                .split(area);

            render_title(frame, chunks[0]);
            render_selectors(frame, chunks[1], &state);
            render_output(frame, chunks[2], &state);
            render_status_bar(frame, chunks[3], &state);

            if state.show_help {
                render_help_overlay(frame, area);
            }
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Major Modes & Scales",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_selectors(frame: &mut Frame, area: Rect, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_names = Mode::ALL.map(|m| m.name());

    frame.render_widget(
        SelectorWidget::new("Tonic", &TONICS, state.tonic).focused(state.focus == Field::Tonic),
        chunks[0],
    );
    frame.render_widget(
        SelectorWidget::new("Accidental", &ACCIDENTAL_LABELS, state.accidental)
            .focused(state.focus == Field::Accidental),
        chunks[1],
    );
    frame.render_widget(
        SelectorWidget::new("Mode", &mode_names, state.mode).focused(state.focus == Field::Mode),
        chunks[2],
    );
}

fn render_output(frame: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default().borders(Borders::ALL).title(" Result ");
    frame.render_widget(Paragraph::new(output_lines(state)).block(block), area);
}

/// Result panel contents: labelled fields, then the chord chart footer
fn output_lines(state: &UiState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = match state.info() {
        Ok(info) => report::fields(&info, &ReportStyle::default())
            .into_iter()
            .flat_map(|(label, value)| {
                [
                    Line::from(Span::styled(
                        format!("{}:", label),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(value, Style::default().fg(Color::Green))),
                ]
            })
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        report::footer(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    )));
    lines
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let text = if let Some(ref msg) = state.status_message {
        Span::styled(msg, Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            " Left/Right: Select field | Up/Down: Change | h: Help | q: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 44.min(area.width.saturating_sub(4));
    let height = 10.min(area.height.saturating_sub(4));
    let x = (area.width - width) / 2;
    let y = (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        help_area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_text = vec![
        Line::from(Span::styled("Selectors", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  Left/Right  Previous/next field"),
        Line::from("  Tab         Next field"),
        Line::from("  Up/Down     Change selection"),
        Line::from("  j/k         Change selection"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  h/?         Toggle help"),
        Line::from("  q/Ctrl+c    Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}
