// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! An interactive shell (ratatui + crossterm) over a [`FactoryView`]: summary tables, the build
//! step viewer and the map overview, plus saving and copying the factory snapshot.

use std::{error::Error, io, path::PathBuf, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::render::render_step_unicode;
use crate::store::JsonSerializer;
use crate::summary::render_summary_unicode;
use crate::view::{FactoryView, ViewEvent, ViewMode};

mod chrome;

use chrome::{footer_line, tab_line};

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;

/// Runs the interactive terminal UI until the user quits.
///
/// Downloads are written to `export_dir`.
pub fn run(view: FactoryView, export_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(view, export_dir);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if let Some(text) = app.take_clipboard() {
                        match copy_to_clipboard(&text) {
                            Ok(via) => app.set_toast(format!("Copied data URI ({via})")),
                            Err(err) => app.set_toast(format!("Copy failed: {err}")),
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    view: FactoryView,
    serializer: JsonSerializer,
    export_dir: PathBuf,
    toast: Option<String>,
    clipboard: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(view: FactoryView, export_dir: PathBuf) -> Self {
        let serializer = view
            .starting_graph()
            .map(|graph| JsonSerializer::with_limits(graph.limits()))
            .unwrap_or_default();
        Self { view, serializer, export_dir, toast: None, clipboard: None, should_quit: false }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        self.toast = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => {
                self.view.dispatch(ViewEvent::ShowSummary);
            }
            KeyCode::Char('i') => {
                self.view.dispatch(ViewEvent::ShowInstructions);
            }
            KeyCode::Char('m') => {
                self.view.dispatch(ViewEvent::ShowMap);
            }
            KeyCode::Left | KeyCode::Char('p') if self.view.mode() == ViewMode::Instructions => {
                self.view.previous_step();
            }
            KeyCode::Right | KeyCode::Char('n') if self.view.mode() == ViewMode::Instructions => {
                self.view.next_step();
            }
            KeyCode::Char('b') => {
                if let Err(err) = self.view.back() {
                    self.set_toast(format!("Back failed: {err}"));
                }
            }
            KeyCode::Char('d') => self.download(),
            KeyCode::Char('y') => match self.view.download(&self.serializer) {
                Ok(download) => self.clipboard = Some(download.data_uri()),
                Err(err) => self.set_toast(format!("Copy failed: {err}")),
            },
            _ => {}
        }
    }

    fn download(&mut self) {
        let written = self
            .view
            .download(&self.serializer)
            .map_err(|err| err.to_string())
            .and_then(|download| {
                download.write_to(&self.export_dir).map_err(|err| err.to_string())
            });
        match written {
            Ok(path) => self.set_toast(format!("Saved {}", path.display())),
            Err(err) => {
                tracing::warn!(error = %err, "download failed");
                self.set_toast(format!("Download failed: {err}"));
            }
        }
    }

    fn set_toast(&mut self, message: String) {
        self.toast = Some(message);
    }

    fn take_clipboard(&mut self) -> Option<String> {
        self.clipboard.take()
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    frame.render_widget(Paragraph::new(tab_line(app.view.mode())), layout[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title(body_title(app));
    frame.render_widget(Paragraph::new(body_text(app)).block(block), layout[1]);

    frame.render_widget(Paragraph::new(footer_line(app)), layout[2]);
}

fn body_title(app: &App) -> String {
    match (app.view.mode(), app.view.pager()) {
        (ViewMode::Instructions, Some(pager)) => format!(
            " Step {}/{}: {} ",
            pager.current_index() + 1,
            pager.len(),
            pager.current_step().title()
        ),
        (mode, _) => format!(" {mode} "),
    }
}

fn body_text(app: &App) -> String {
    match app.view.mode() {
        ViewMode::Summary => render_summary_unicode(app.view.summary())
            .unwrap_or_else(|err| format!("Cannot draw summary: {err}")),
        ViewMode::Instructions => match app.view.pager() {
            Some(pager) => render_step_unicode(pager.current_step())
                .unwrap_or_else(|err| format!("Cannot draw step: {err}")),
            None => "No build steps for this factory.".to_owned(),
        },
        ViewMode::Map => map_text(app),
    }
}

fn map_text(app: &App) -> String {
    let Some(pager) = app.view.pager() else {
        return "Nothing to place yet.".to_owned();
    };
    let mut out = String::from("Build order:\n");
    for (idx, step) in pager.steps().iter().enumerate() {
        let marker = if idx == pager.current_index() { '▶' } else { ' ' };
        out.push_str(&format!("{marker} {:>3}. {}\n", idx + 1, step.title()));
    }
    out
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
