// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive TUI shell (ratatui + crossterm) around a [`Workspace`]. Mouse
//! input drives drag/pan/zoom through the pointer gesture machine; the
//! keyboard drives tree edits and view commands.

use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout as UiLayout, Rect as UiRect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use crate::model::{photo, Gender, PersonId};
use crate::ops::{Op, PersonPatch};
use crate::render::render_scene;
use crate::scene::Point;
use crate::view::{DispatchOutcome, PointerController, PointerEvent};
use crate::workspace::Workspace;

#[cfg(test)]
mod tests;

const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const SELECTED_COLOR: Color = Color::LightGreen;
const TOAST_COLOR: Color = Color::Yellow;

/// Fallback viewport before the first draw sized the diagram pane.
const FALLBACK_VIEW_W: u16 = 80;
const FALLBACK_VIEW_H: u16 = 24;

/// Runs the TUI against the built-in demo tree.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_workspace(Workspace::demo(), None)
}

pub fn run_with_workspace(
    workspace: Workspace,
    save_path: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(workspace, save_path);

    while !app.should_quit {
        app.expire_toast();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if let Some(action) = app.take_external_action() {
                        let result =
                            terminal.run_external_action(|| app.execute_external_action(action));
                        if let Err(err) = result {
                            app.set_toast(format!("External action failed: {err}"));
                        }
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExternalAction {
    PrintDiagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    AddPerson,
    Rename,
    LinkSpouses,
    UnlinkSpouses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prompt {
    kind: PromptKind,
    input: String,
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    workspace: Workspace,
    pointer: PointerController,
    selected: Option<PersonId>,
    prompt: Option<Prompt>,
    toast: Option<Toast>,
    save_path: Option<PathBuf>,
    diagram_area: UiRect,
    pending_external_action: Option<ExternalAction>,
    should_quit: bool,
}

impl App {
    fn new(workspace: Workspace, save_path: Option<PathBuf>) -> Self {
        Self {
            workspace,
            pointer: PointerController::new(),
            selected: None,
            prompt: None,
            toast: None,
            save_path,
            diagram_area: UiRect::new(0, 0, FALLBACK_VIEW_W, FALLBACK_VIEW_H),
            pending_external_action: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_step(-1.0),
            KeyCode::Char('-') => self.zoom_step(1.0),
            KeyCode::Char('f') => {
                let (w, h) = self.view_size();
                self.workspace.fit_to_view(w, h);
            }
            KeyCode::Char('0') => self.workspace.reset_view(),
            KeyCode::Char('a') => self.open_prompt(PromptKind::AddPerson),
            KeyCode::Char('r') => {
                if self.selected.is_some() {
                    self.open_prompt(PromptKind::Rename);
                } else {
                    self.set_toast("Select a person first (click a card)");
                }
            }
            KeyCode::Char('m') => self.open_prompt(PromptKind::LinkSpouses),
            KeyCode::Char('u') => self.open_prompt(PromptKind::UnlinkSpouses),
            KeyCode::Char('x') => self.remove_selected(),
            KeyCode::Char('s') => self.save_snapshot(),
            KeyCode::Char('p') => {
                self.pending_external_action = Some(ExternalAction::PrintDiagram);
            }
            KeyCode::Esc => self.selected = None,
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => self.commit_prompt(),
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let area = self.diagram_area;
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        let at = Point::new(
            f64::from(mouse.column) - f64::from(area.x),
            f64::from(mouse.row) - f64::from(area.y),
        );
        // Drag and Up stay live outside the pane so a gesture that leaves the
        // viewport keeps its capture until release.
        let pointer_event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => PointerEvent::Down(at),
            MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Move(at),
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up,
            MouseEventKind::ScrollUp if inside => PointerEvent::Wheel { at, delta: -1.0 },
            MouseEventKind::ScrollDown if inside => PointerEvent::Wheel { at, delta: 1.0 },
            _ => return,
        };
        let scene = self.workspace.scene();
        let (transform, offsets) = self.workspace.view_state_mut();
        if let DispatchOutcome::DragStarted { person } =
            self.pointer.dispatch(pointer_event, &scene, transform, offsets)
        {
            self.selected = Some(person);
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    fn commit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let result = match prompt.kind {
            PromptKind::AddPerson => self.commit_add(&prompt.input),
            PromptKind::Rename => self.commit_rename(&prompt.input),
            PromptKind::LinkSpouses => self.commit_pair(&prompt.input, true),
            PromptKind::UnlinkSpouses => self.commit_pair(&prompt.input, false),
        };
        match result {
            Ok(message) => self.set_toast(message),
            Err(message) => self.set_toast(message),
        }
    }

    fn commit_add(&mut self, input: &str) -> Result<String, String> {
        let command = parse_add_command(input)?;
        let photo = match &command.photo_path {
            Some(path) => load_photo(path)?,
            None => String::new(),
        };
        let op = Op::AddPerson {
            name: command.name.clone(),
            photo,
            gender: command.gender,
            parent_a: command.parents.first().copied(),
            parent_b: command.parents.get(1).copied(),
            spouse: command.spouse,
        };
        self.workspace
            .apply(op)
            .map(|_| format!("Added {}", command.name))
            .map_err(|err| err.to_string())
    }

    fn commit_rename(&mut self, input: &str) -> Result<String, String> {
        let person_id = self
            .selected
            .ok_or_else(|| "No person selected".to_owned())?;
        let name = input.trim();
        if name.is_empty() {
            return Err("Name cannot be empty".to_owned());
        }
        self.workspace
            .apply(Op::UpdatePerson {
                person_id,
                patch: PersonPatch {
                    name: Some(name.to_owned()),
                    ..PersonPatch::default()
                },
            })
            .map(|_| format!("Renamed #{person_id} to {name}"))
            .map_err(|err| err.to_string())
    }

    fn commit_pair(&mut self, input: &str, link: bool) -> Result<String, String> {
        let (a, b) = parse_id_pair(input)?;
        let op = if link {
            Op::LinkSpouses { a, b }
        } else {
            Op::UnlinkSpouses { a, b }
        };
        self.workspace
            .apply(op)
            .map(|_| {
                if link {
                    format!("Linked {a} and {b}")
                } else {
                    format!("Unlinked {a} and {b}")
                }
            })
            .map_err(|err| err.to_string())
    }

    fn remove_selected(&mut self) {
        let Some(person_id) = self.selected else {
            self.set_toast("Select a person first (click a card)");
            return;
        };
        match self.workspace.apply(Op::RemovePerson { person_id }) {
            Ok(_) => {
                self.selected = None;
                self.set_toast(format!("Removed #{person_id}"));
            }
            Err(err) => self.set_toast(err.to_string()),
        }
    }

    fn save_snapshot(&mut self) {
        let Some(path) = self.save_path.clone() else {
            self.set_toast("No file to save to (start with a tree file)");
            return;
        };
        match fs::write(&path, self.workspace.snapshot().to_json()) {
            Ok(()) => self.set_toast(format!("Saved {}", path.display())),
            Err(err) => self.set_toast(format!("Save failed: {err}")),
        }
    }

    fn zoom_step(&mut self, delta: f64) {
        let (w, h) = self.view_size();
        let center = Point::new(w / 2.0, h / 2.0);
        let (transform, _) = self.workspace.view_state_mut();
        transform.zoom_at(center, delta);
    }

    fn view_size(&self) -> (f64, f64) {
        (
            f64::from(self.diagram_area.width.max(1)),
            f64::from(self.diagram_area.height.max(1)),
        )
    }

    fn take_external_action(&mut self) -> Option<ExternalAction> {
        self.pending_external_action.take()
    }

    fn execute_external_action(&mut self, action: ExternalAction) -> Result<(), String> {
        match action {
            ExternalAction::PrintDiagram => self.print_diagram(),
        }
    }

    /// Prints a fitted rendering to the plain terminal, then waits for Enter
    /// so it can be read (or copied) before the alternate screen returns.
    fn print_diagram(&mut self) -> Result<(), String> {
        let (w, h) = self.view_size();
        let lines = self.workspace.print_with(w, h, |scene, transform| {
            render_scene(scene, transform, w as usize, h as usize)
        });

        let mut stdout = io::stdout();
        for line in &lines {
            writeln!(stdout, "{line}").map_err(|err| err.to_string())?;
        }
        write!(stdout, "\nPress Enter to return...").map_err(|err| err.to_string())?;
        stdout.flush().map_err(|err| err.to_string())?;
        let mut discard = String::new();
        io::stdin()
            .lock()
            .read_line(&mut discard)
            .map_err(|err| err.to_string())?;
        Ok(())
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    fn expire_toast(&mut self) {
        if matches!(&self.toast, Some(toast) if Instant::now() >= toast.expires_at) {
            self.toast = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AddCommand {
    name: String,
    gender: Gender,
    parents: Vec<PersonId>,
    spouse: Option<PersonId>,
    photo_path: Option<String>,
}

/// Parses the add-person prompt line:
/// `NAME[; gender=M|F][; parents=ID[,ID]][; spouse=ID][; photo=PATH]`
fn parse_add_command(input: &str) -> Result<AddCommand, String> {
    let mut parts = input.split(';');
    let name = parts.next().unwrap_or("").trim();
    if name.is_empty() {
        return Err("Name is required".to_owned());
    }

    let mut command = AddCommand {
        name: name.to_owned(),
        gender: Gender::Unspecified,
        parents: Vec::new(),
        spouse: None,
        photo_path: None,
    };
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((key, value)) = part.split_once('=') else {
            return Err(format!("Expected key=value, got '{part}'"));
        };
        let value = value.trim();
        match key.trim() {
            "gender" => command.gender = Gender::parse(value),
            "parents" => {
                for raw in value.split(',') {
                    let raw = raw.trim();
                    if raw.is_empty() {
                        continue;
                    }
                    let parent_id = raw
                        .parse()
                        .map_err(|_| format!("Invalid parent id '{raw}'"))?;
                    command.parents.push(parent_id);
                }
                if command.parents.len() > 2 {
                    return Err("At most 2 parents".to_owned());
                }
            }
            "spouse" => {
                command.spouse =
                    Some(value.parse().map_err(|_| format!("Invalid spouse id '{value}'"))?);
            }
            "photo" => command.photo_path = Some(value.to_owned()),
            other => return Err(format!("Unknown field '{other}'")),
        }
    }
    Ok(command)
}

/// Parses two ids separated by whitespace or a comma.
fn parse_id_pair(input: &str) -> Result<(PersonId, PersonId), String> {
    let mut ids = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|raw| !raw.is_empty());
    let a = ids
        .next()
        .ok_or("Expected two ids, e.g. '1 2'")?
        .parse()
        .map_err(|_| "Invalid first id".to_owned())?;
    let b = ids
        .next()
        .ok_or("Expected two ids, e.g. '1 2'")?
        .parse()
        .map_err(|_| "Invalid second id".to_owned())?;
    if ids.next().is_some() {
        return Err("Expected exactly two ids".to_owned());
    }
    Ok((a, b))
}

fn load_photo(path: &str) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|err| format!("Cannot read photo '{path}': {err}"))?;
    let mime = photo::mime_for_path(Path::new(path))
        .ok_or_else(|| format!("Unsupported photo type '{path}'"))?;
    Ok(photo::data_url(mime, &bytes))
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = UiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let title = format!(
        " Parentela — {} people, zoom {:.0}% ",
        app.workspace.tree().len(),
        app.workspace.transform().k * 100.0
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(main_area);
    app.diagram_area = inner;

    let lines = render_scene(
        &app.workspace.scene(),
        app.workspace.transform(),
        inner.width as usize,
        inner.height as usize,
    );
    let diagram = Paragraph::new(Text::from(
        lines.into_iter().map(Line::from).collect::<Vec<_>>(),
    ))
    .block(block);
    frame.render_widget(diagram, main_area);

    frame.render_widget(status_line(app), status_area);
}

fn status_line(app: &App) -> Paragraph<'static> {
    if let Some(prompt) = &app.prompt {
        let label = match prompt.kind {
            PromptKind::AddPerson => "add (NAME; gender=F; parents=1,2; spouse=3; photo=PATH)",
            PromptKind::Rename => "rename",
            PromptKind::LinkSpouses => "marry (ID ID)",
            PromptKind::UnlinkSpouses => "unmarry (ID ID)",
        };
        return Paragraph::new(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(FOOTER_LABEL_COLOR)),
            Span::raw(prompt.input.clone()),
            Span::styled("▏", Style::default().fg(FOOTER_KEY_COLOR)),
        ]));
    }

    if let Some(toast) = &app.toast {
        return Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(TOAST_COLOR),
        )));
    }

    let mut spans = Vec::new();
    if let Some(person_id) = app.selected {
        let name = app
            .workspace
            .tree()
            .person(person_id)
            .map(|person| person.name().to_owned())
            .unwrap_or_default();
        spans.push(Span::styled(
            format!("▸ {name} #{person_id}  "),
            Style::default().fg(SELECTED_COLOR),
        ));
    }
    for (key, label) in [
        ("a", "add"),
        ("r", "rename"),
        ("m", "marry"),
        ("u", "unmarry"),
        ("x", "delete"),
        ("s", "save"),
        ("p", "print"),
        ("f", "fit"),
        ("0", "reset"),
        ("+/-", "zoom"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(key, Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    Paragraph::new(Line::from(spans))
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
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

    fn run_external_action(
        &mut self,
        action: impl FnOnce() -> Result<(), String>,
    ) -> Result<(), String> {
        let _suspend = TerminalSuspendGuard::new(&mut self.terminal)
            .map_err(|err| format!("terminal suspend failed: {err}"))?;
        action()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

struct TerminalSuspendGuard<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
}

impl<'a> TerminalSuspendGuard<'a> {
    fn new(terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Self> {
        terminal.show_cursor()?;
        disable_raw_mode()?;

        if let Err(err) = execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)
        {
            let _ = enable_raw_mode();
            let _ = execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture);
            let _ = terminal.hide_cursor();
            let _ = ratatui::backend::Backend::flush(terminal.backend_mut());
            return Err(err);
        }

        ratatui::backend::Backend::flush(terminal.backend_mut())?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSuspendGuard<'_> {
    fn drop(&mut self) {
        let _ = enable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        );
        let _ = self.terminal.clear();
        let _ = self.terminal.hide_cursor();
        let _ = ratatui::backend::Backend::flush(self.terminal.backend_mut());
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
