use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Autocomplete dropdown rendered directly under the search bar.
///
/// Navigation state itself lives in the reducer; this component mirrors it
/// for rendering and translates keys into suggestion messages.
#[derive(Default)]
pub struct SuggestionList {
    items: Vec<String>,
    active: Option<usize>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    pub fn set_active(&mut self, active: Option<usize>) {
        self.active = active;
    }

    pub fn desired_height(&self, max_rows: u16) -> u16 {
        (self.items.len() as u16).min(max_rows) + 2
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let visible_rows = area.height.saturating_sub(2) as usize;
        // Keep the active row in view when the list is taller than the area.
        let offset = match self.active {
            Some(i) if i >= visible_rows => i + 1 - visible_rows,
            _ => 0,
        };

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, item)| {
                if Some(i) == self.active {
                    Line::styled(
                        item.clone(),
                        Style::default()
                            .bg(Color::Blue)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(item.clone())
                }
            })
            .collect();

        let list = Paragraph::new(lines)
            .block(Block::default().title("Suggestions").borders(Borders::ALL));

        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Down => Some(Message::SuggestionMoveDown),
            KeyCode::Up => Some(Message::SuggestionMoveUp),
            KeyCode::Enter if self.active.is_some() => Some(Message::SuggestionAccepted),
            KeyCode::Esc => Some(Message::SuggestionDismissed),
            _ => None,
        }
    }
}
