use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Floating panel showing the cached rendering of the dwelled-on result.
///
/// A single panel instance is reused across results; new content replaces
/// the old in place.
#[derive(Default)]
pub struct PreviewPopup {
    content: String,
    scroll: u16,
    focused: bool,
}

impl PreviewPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&mut self, content: String) {
        if content != self.content {
            self.content = content;
            self.scroll = 0;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl Component for PreviewPopup {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if self.focused {
            "Preview (Esc to close)"
        } else {
            "Preview"
        };

        let panel = Paragraph::new(self.content.as_str())
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        f.render_widget(Clear, area);
        f.render_widget(panel, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            KeyCode::Esc | KeyCode::Tab => Some(Message::PreviewPanelBlurred),
            _ => None,
        }
    }
}
