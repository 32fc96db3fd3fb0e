//! Terminal UI host for vkbd_mini using crossterm and ratatui.
//!
//! Arrow keys move over the on-screen keys, Enter presses the selected key,
//! Left/Right with Alt move the text cursor. Esc quits.
//! Run with: cargo run --example tui_keyboard

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use vkbd_mini::{
    ControlKey, KeyCategory, KeyDescriptor, KeyListener, Keyboard, KeyboardBuilder, SessionState,
    SharedListener,
};

/// The host application's own text field, mirrored from the keyboard.
#[derive(Default)]
struct HostField {
    text: String,
}

impl KeyListener for HostField {
    fn on_key(&mut self, current_text: &str) {
        self.text = current_text.to_string();
    }
}

struct App {
    keyboard: Keyboard,
    field: Rc<RefCell<HostField>>,
    row: usize,
    col: usize,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self::with_keyboard(Keyboard::builder())
    }

    fn with_keyboard(builder: KeyboardBuilder) -> Self {
        let field = Rc::new(RefCell::new(HostField::default()));
        let listener: SharedListener = field.clone();
        let mut keyboard = builder.listener(listener).build();
        keyboard.open("");
        Self {
            keyboard,
            field,
            row: 1,
            col: 0,
            message: "-- EDITING --".to_string(),
            should_quit: false,
        }
    }

    /// Keys shown on screen; the language key is hidden when switching is off.
    fn visible_rows(&self) -> Vec<Vec<&KeyDescriptor>> {
        let can_switch = self.keyboard.can_switch_language();
        self.keyboard
            .layout()
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|k| {
                        can_switch || k.category != KeyCategory::Control(ControlKey::Language)
                    })
                    .collect()
            })
            .collect()
    }

    fn clamp_selection(&mut self) {
        let (row, row_len) = {
            let rows = self.visible_rows();
            let row = self.row.min(rows.len() - 1);
            (row, rows[row].len())
        };
        self.row = row;
        self.col = self.col.min(row_len - 1);
    }

    fn selected_id(&self) -> &'static str {
        self.visible_rows()[self.row][self.col].id
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        if self.keyboard.state().is_closed() {
            self.should_quit = true;
            return;
        }

        match event.code {
            CKeyCode::Esc => self.should_quit = true,
            CKeyCode::Left if event.modifiers.contains(KeyModifiers::ALT) => {
                let cursor = self.keyboard.cursor().saturating_sub(1);
                self.keyboard.set_cursor(cursor);
            }
            CKeyCode::Right if event.modifiers.contains(KeyModifiers::ALT) => {
                let cursor = self.keyboard.cursor() + 1;
                self.keyboard.set_cursor(cursor);
            }
            CKeyCode::Up => self.row = self.row.saturating_sub(1),
            CKeyCode::Down => self.row += 1,
            CKeyCode::Left => self.col = self.col.saturating_sub(1),
            CKeyCode::Right => self.col += 1,
            CKeyCode::Enter => {
                let id = self.selected_id();
                if let Err(err) = self.keyboard.press(id) {
                    self.message = err.to_string();
                    return;
                }
            }
            _ => {}
        }
        self.clamp_selection();

        self.message = match self.keyboard.state() {
            SessionState::Idle | SessionState::Editing => {
                format!("-- {} --", self.keyboard.language().code().to_uppercase())
            }
            SessionState::Confirmed => {
                format!("accepted: {:?} (press any key)", self.keyboard.result())
            }
            SessionState::Canceled => "canceled (press any key)".to_string(),
        };
    }
}

fn key_label(category: KeyCategory, label: &str, app: &App) -> String {
    match category {
        KeyCategory::Control(ControlKey::Backspace) => "⌫".to_string(),
        KeyCategory::Control(ControlKey::Upper) => {
            let arrow = if app.keyboard.case().upper { "⇧" } else { "⇩" };
            arrow.to_string()
        }
        KeyCategory::Control(ControlKey::Language) => app.keyboard.language().other().to_string(),
        KeyCategory::Control(ControlKey::Ok) => "OK".to_string(),
        KeyCategory::Control(ControlKey::Cancel) => "Cancel".to_string(),
        _ if label == " " => "space".to_string(),
        _ => label.to_string(),
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    // Host field: what the application sees through the listener
    let host = Paragraph::new(app.field.borrow().text.clone())
        .block(Block::default().borders(Borders::ALL).title("host field"));
    f.render_widget(host, chunks[0]);

    // Keyboard edit line with the cursor
    let text: Vec<char> = app.keyboard.text().chars().collect();
    let (before, after): (String, String) = (
        text[..app.keyboard.cursor()].iter().collect(),
        text[app.keyboard.cursor()..].iter().collect(),
    );
    let edit = Paragraph::new(Line::from(vec![
        Span::raw(before),
        Span::styled("|", Style::default().fg(Color::Yellow)),
        Span::raw(after),
    ]))
    .block(Block::default().borders(Borders::ALL).title("vkbd_mini demo"));
    f.render_widget(edit, chunks[1]);

    let mut lines = vec![];
    for (r, row) in app.visible_rows().iter().enumerate() {
        let mut spans = vec![];
        for (c, key) in row.iter().enumerate() {
            let label = format!(" {} ", key_label(key.category, key.label(), app));
            let style = if r == app.row && c == app.col {
                Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(label, style));
        }
        lines.push(Line::from(spans));
    }
    let keys = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(keys, chunks[2]);

    // Status line
    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[3]);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    while !app.should_quit {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_crossterm_event(key);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.keyboard.state() == SessionState::Confirmed {
        println!("{}", app.keyboard.result());
    }
    Ok(())
}
