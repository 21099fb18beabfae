use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::interactive::constants::SUGGESTION_LIST_MAX_ROWS;
use crate::interactive::ui::app_state::{AppState, PreviewPhase};
use crate::interactive::ui::components::{
    Component, preview_popup::PreviewPopup, result_list::ResultList, search_bar::SearchBar,
    suggestion_list::SuggestionList,
};

pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
    result_list: ResultList,
    preview_popup: PreviewPopup,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            suggestion_list: SuggestionList::new(),
            result_list: ResultList::new(),
            preview_popup: PreviewPopup::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let area = f.area();

        // Sync component state from the reducer-owned state.
        if self.search_bar.query() != state.search.input {
            self.search_bar.set_query(state.search.input.clone());
        }
        self.search_bar.set_loading(state.ui.is_loading);
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.set_pinned(self.result_list.is_scrolled());

        self.result_list.set_items(state.search.results.clone());
        self.result_list
            .set_selected_index(state.search.selected_index);
        self.result_list.set_empty_state(state.shows_empty_state());

        self.suggestion_list.set_items(state.suggest.items.clone());
        self.suggestion_list.set_active(state.suggest.active);

        if let Some(content) = &state.preview.content {
            self.preview_popup.set_content(content.clone());
        }
        self.preview_popup.set_focused(state.preview.panel_focused);

        // The input grows to fit a query longer than one visual line.
        let bar_height = self.search_bar.desired_height(area.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(bar_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);

        let hints = "Enter: Search | ↑/↓: Navigate | Tab: Focus preview | Esc: Dismiss/Quit";
        let status = Paragraph::new(hints)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(status, chunks[2]);

        // Dropdown overlays the top of the result area, under the bar.
        if state.suggest.visible {
            let height = self
                .suggestion_list
                .desired_height(SUGGESTION_LIST_MAX_ROWS)
                .min(chunks[1].height);
            let dropdown = Rect {
                x: chunks[0].x + 1,
                y: chunks[0].y + bar_height.saturating_sub(1),
                width: chunks[0].width.saturating_sub(2),
                height,
            };
            self.suggestion_list.render(f, dropdown);
        }

        if matches!(state.preview.phase, PreviewPhase::Shown { .. }) {
            let popup = popup_area(area);
            self.preview_popup.render(f, popup);
        }
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn preview_popup_mut(&mut self) -> &mut PreviewPopup {
        &mut self.preview_popup
    }
}

/// Right-leaning floating rect for the preview panel.
fn popup_area(area: Rect) -> Rect {
    let width = (area.width * 3 / 5).max(20).min(area.width);
    let height = (area.height * 7 / 10).max(8).min(area.height);
    Rect {
        x: area.width.saturating_sub(width + 1),
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
