use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::db::Database;

use super::helpers::surface_error;
use super::panel::{Feature, Panel};

/// Which half of the screen receives plain key presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Panel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// The whole application shell: sidebar selection, the currently mounted
/// panel, and the footer status line. One of these lives for the entire
/// session and the terminal loop drives it.
pub struct App {
    db: Database,
    selected: usize,
    panel: Option<Panel>,
    focus: Focus,
    status: Option<StatusMessage>,
    dark_theme: bool,
}

impl App {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            selected: 0,
            panel: None,
            focus: Focus::Sidebar,
            status: None,
            dark_theme: true,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    /// Open the attachment of the selected assignment with the system opener.
    /// Only meaningful while the LMS panel is mounted.
    pub fn open_attachment(&mut self) {
        let (text, kind) = match &self.panel {
            None => (
                "Open a feature panel first.".to_string(),
                StatusKind::Error,
            ),
            Some(panel) if panel.feature != Feature::Lms => (
                "Attachments are only available in the LMS panel.".to_string(),
                StatusKind::Error,
            ),
            Some(panel) => match panel.selected_attachment() {
                None => ("No assignment selected.".to_string(), StatusKind::Error),
                Some("") => (
                    "This assignment has no attachment.".to_string(),
                    StatusKind::Error,
                ),
                Some(path) => match open::that(path) {
                    Ok(()) => (format!("Opened {path}"), StatusKind::Info),
                    Err(err) => (format!("Could not open {path}: {err}"), StatusKind::Error),
                },
            },
        };
        self.set_status(text, kind);
    }

    fn mount_selected(&mut self) {
        let feature = Feature::ALL[self.selected];
        match Panel::mount(&self.db, feature) {
            Ok(panel) => {
                self.panel = Some(panel);
                self.focus = Focus::Panel;
                self.status = None;
            }
            Err(err) => {
                // The shell stays usable; the failure lands in the footer.
                self.panel = None;
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    /// Handle one non-control key press. Returns `true` when the app should
    /// exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match self.focus {
            Focus::Sidebar => match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Up => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                }
                KeyCode::Down => {
                    if self.selected + 1 < Feature::ALL.len() {
                        self.selected += 1;
                    }
                }
                KeyCode::Enter => self.mount_selected(),
                KeyCode::Tab => {
                    if self.panel.is_some() {
                        self.focus = Focus::Panel;
                    }
                }
                KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
                _ => {}
            },
            Focus::Panel => {
                let Some(panel) = &mut self.panel else {
                    self.focus = Focus::Sidebar;
                    return Ok(false);
                };
                match code {
                    KeyCode::Esc => self.focus = Focus::Sidebar,
                    KeyCode::Tab => panel.focus_next_field(),
                    KeyCode::BackTab => panel.focus_prev_field(),
                    KeyCode::Enter => {
                        if let Some(notice) = panel.submit(&self.db)? {
                            self.set_status(notice, StatusKind::Info);
                        }
                    }
                    KeyCode::Up => panel.move_list_selection(-1),
                    KeyCode::Down => panel.move_list_selection(1),
                    KeyCode::Backspace => panel.backspace(),
                    KeyCode::Char(ch) => panel.push_char(ch),
                    _ => {}
                }
            }
        }
        Ok(false)
    }

    fn accent(&self) -> Color {
        if self.dark_theme {
            Color::Yellow
        } else {
            Color::Cyan
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(40)])
            .split(rows[0]);

        self.draw_sidebar(frame, columns[0]);
        self.draw_content(frame, columns[1]);
        self.draw_footer(frame, rows[1]);
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (index, feature) in Feature::ALL.iter().enumerate() {
            let marker = if index == self.selected { "▶ " } else { "  " };
            let style = if index == self.selected && self.focus == Focus::Sidebar {
                Style::default()
                    .fg(self.accent())
                    .add_modifier(Modifier::BOLD)
            } else if index == self.selected {
                Style::default().fg(self.accent())
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", feature.title()),
                style,
            )));
        }
        let sidebar = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Features"));
        frame.render_widget(sidebar, area);
    }

    fn draw_content(&self, frame: &mut Frame, area: Rect) {
        let Some(panel) = &self.panel else {
            let placeholder = Paragraph::new("Select a feature from the menu")
                .block(Block::default().borders(Borders::ALL).title("SchoolDesk"))
                .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, area);
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        let mut cursor: Option<(u16, u16)> = None;
        for (section_index, section) in panel.sections.iter().enumerate() {
            let section_focused =
                self.focus == Focus::Panel && section_index == panel.active_section;
            if let Some(heading) = section.heading {
                lines.push(Line::from(Span::styled(
                    heading,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
            for field_index in 0..section.form.len() {
                let focused = section_focused && field_index == section.form.active();
                if focused {
                    let x = area.x
                        + 1
                        + section.form.active_label_len() as u16
                        + section.form.active_value_len() as u16;
                    let y = area.y + 1 + lines.len() as u16;
                    cursor = Some((x, y));
                }
                lines.push(section.form.build_line(field_index, focused));
            }
            if let Some(error) = &section.form.error {
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(Color::Red),
                )));
            }
            if let Some(list) = &section.list {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    list.title,
                    Style::default().fg(self.accent()),
                )));
                if list.rows.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "  (nothing here yet)",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                for (row_index, row) in list.rows.iter().enumerate() {
                    let marker = if row_index == list.selected { "▶ " } else { "  " };
                    lines.push(Line::from(format!("{marker}{row}")));
                }
            }
            lines.push(Line::default());
        }

        let content = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(panel.feature.title()),
        );
        frame.render_widget(content, area);
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(status.text.clone(), status.kind.style())),
            None => Line::from(Span::styled(
                match self.focus {
                    Focus::Sidebar => {
                        "↑/↓ select  Enter open  Ctrl+T theme  q quit"
                    }
                    Focus::Panel => {
                        "Tab next field  Enter submit  ↑/↓ list  Ctrl+O open file  Esc menu"
                    }
                },
                Style::default().fg(Color::DarkGray),
            )),
        };
        let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}
