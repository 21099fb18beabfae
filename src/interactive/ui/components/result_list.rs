use crate::client::ResultItem;
use crate::interactive::constants::PAGE_JUMP;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rows each rendered result occupies (hostname/url, title, snippet, spacer).
const ROWS_PER_RESULT: usize = 4;

#[derive(Default)]
pub struct ResultList {
    items: Vec<ResultItem>,
    selected_index: usize,
    scroll_offset: usize,
    empty_state: bool,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<ResultItem>) {
        self.items = items;
        if self.scroll_offset >= self.items.len() {
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.items.len().saturating_sub(1));
    }

    /// Show "No results found." instead of the idle hint.
    pub fn set_empty_state(&mut self, empty_state: bool) {
        self.empty_state = empty_state;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > 0
    }

    fn visible_count(&self, area: Rect) -> usize {
        (area.height.saturating_sub(2) as usize / ROWS_PER_RESULT).max(1)
    }

    fn clamp_scroll(&mut self, area: Rect) {
        let visible = self.visible_count(area);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Results").borders(Borders::ALL);
        if self.items.is_empty() {
            let text = if self.empty_state {
                "No results found."
            } else {
                "Type a query and press Enter to search."
            };
            let placeholder = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        self.clamp_scroll(area);
        let visible = self.visible_count(area);

        let mut lines: Vec<Line> = Vec::new();
        for (i, item) in self
            .items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
        {
            let marker = if i == self.selected_index { "> " } else { "  " };
            let title_style = if i == self.selected_index {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Blue)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.hostname.clone(), Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::styled(item.url.clone(), Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(item.title.clone(), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(item.snippet.clone()),
            ]));
            lines.push(Line::raw(""));
        }

        let list = Paragraph::new(lines).block(block);
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        let target = match key.code {
            KeyCode::Up => self.selected_index.saturating_sub(1),
            KeyCode::Down => (self.selected_index + 1).min(last),
            KeyCode::PageUp => self.selected_index.saturating_sub(PAGE_JUMP),
            KeyCode::PageDown => (self.selected_index + PAGE_JUMP).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return None,
        };
        self.selected_index = target;
        Some(Message::SelectResult(target))
    }
}
