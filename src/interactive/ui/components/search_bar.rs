use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    pinned: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.cursor_position = self.query.chars().count();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Visual "stuck to top" state while the result list is scrolled.
    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Height the bar wants for the current query width, growing past a
    /// single line when the text overflows it.
    pub fn desired_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let lines = self.query.chars().count() / inner + 1;
        (lines as u16).min(4) + 2
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum()
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }
        pos
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.cursor_position < self.query.chars().count() {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let after: String = self.query.chars().skip(self.cursor_position).collect();
            vec![
                Span::raw(before),
                Span::styled(
                    after.chars().next().unwrap_or(' ').to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(after.chars().skip(1).collect::<String>()),
            ]
        } else {
            vec![
                Span::raw(&self.query),
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
            ]
        };

        let mut title = "Search".to_string();
        if self.pinned {
            title.push_str(" [pinned]");
        }
        if self.is_loading {
            title.push_str(" - [loading...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let border_style = if self.pinned {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: false });

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    return None;
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    return None;
                }
                KeyCode::Char('u') => {
                    if self.cursor_position > 0 && self.delete_range(0, self.cursor_position) {
                        return Some(Message::QueryEdited(self.query.clone()));
                    }
                    return None;
                }
                KeyCode::Char('w') => {
                    if self.cursor_position > 0 {
                        let new_pos = self.prev_word_boundary(self.cursor_position);
                        if self.delete_range(new_pos, self.cursor_position) {
                            return Some(Message::QueryEdited(self.query.clone()));
                        }
                    }
                    return None;
                }
                _ => return None,
            }
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                Some(Message::QueryEdited(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0
                    && self.delete_range(self.cursor_position - 1, self.cursor_position)
                {
                    Some(Message::QueryEdited(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                    Some(Message::QueryEdited(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
