pub mod preview_popup;
pub mod result_list;
pub mod search_bar;
pub mod suggestion_list;

#[cfg(test)]
mod suggestion_list_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
