use crate::client::ResultItem;
use crate::interactive::constants::*;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

pub struct AppState {
    pub search: SearchState,
    pub suggest: SuggestState,
    pub preview: PreviewState,
    pub ui: UiState,
}

/// Pagination state for the current search session. Reset wholesale whenever
/// a new query is submitted.
pub struct SearchState {
    /// Text currently in the search input.
    pub input: String,
    /// Query of the active search session; fixed once submitted.
    pub query: String,
    pub results: Vec<ResultItem>,
    pub selected_index: usize,
    pub page_index: usize,
    pub fetch_in_flight: bool,
    pub search_active: bool,
    /// Set when a continuation page comes back empty; suppresses further
    /// scroll-triggered fetches until the next submitted search.
    pub end_reached: bool,
    /// Tag carried by page requests so responses from a superseded session
    /// are discarded.
    pub current_page_id: u64,
}

pub struct SuggestState {
    pub items: Vec<String>,
    pub visible: bool,
    pub active: Option<usize>,
    /// Latest issued autocomplete sequence id; older responses are stale.
    pub latest_seq: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreviewPhase {
    Idle,
    /// Dwell timer running for the result at `index`; no fetch issued yet.
    Pending { index: usize },
    /// Panel visible with content for the result at `index`.
    Shown { index: usize },
}

pub struct PreviewState {
    pub phase: PreviewPhase,
    /// Index of the result an issued preview fetch is still outstanding for.
    pub pending_fetch: Option<usize>,
    pub content: Option<String>,
    pub panel_focused: bool,
}

pub struct UiState {
    pub message: Option<String>,
    /// True only while the initial fetch of a search is in flight;
    /// continuation fetches do not re-show the loading indicator.
    pub is_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SearchState {
                input: String::new(),
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                page_index: 0,
                fetch_in_flight: false,
                search_active: false,
                end_reached: false,
                current_page_id: 0,
            },
            suggest: SuggestState {
                items: Vec::new(),
                visible: false,
                active: None,
                latest_seq: 0,
            },
            preview: PreviewState {
                phase: PreviewPhase::Idle,
                pending_fetch: None,
                content: None,
                panel_focused: false,
            },
            ui: UiState {
                message: None,
                is_loading: false,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryEdited(text) => self.on_query_edited(text),
            Message::SearchSubmitted => self.on_search_submitted(),
            Message::PageLoaded { id, reset, items } => self.on_page_loaded(id, reset, items),
            Message::PageFailed { id, error } => self.on_page_failed(id, error),
            Message::SuggestionsLoaded { seq, items } => self.on_suggestions_loaded(seq, items),
            Message::SuggestionsFailed { seq } => {
                if seq == self.suggest.latest_seq {
                    self.hide_suggestions();
                }
                Command::None
            }
            Message::SuggestionMoveDown => self.on_suggestion_move(1),
            Message::SuggestionMoveUp => self.on_suggestion_move(-1),
            Message::SuggestionAccepted => self.on_suggestion_accepted(),
            Message::SuggestionDismissed => {
                self.hide_suggestions();
                Command::None
            }
            Message::SelectResult(index) => self.on_select_result(index),
            Message::PreviewDwellElapsed(index) => self.on_dwell_elapsed(index),
            Message::PreviewLoaded {
                index,
                row_key,
                text,
            } => self.on_preview_loaded(index, row_key, text),
            Message::PreviewFailed { index, error } => self.on_preview_failed(index, error),
            Message::PreviewHideElapsed => {
                self.preview.phase = PreviewPhase::Idle;
                self.preview.content = None;
                self.preview.panel_focused = false;
                Command::None
            }
            Message::PreviewPanelFocused => {
                if matches!(self.preview.phase, PreviewPhase::Shown { .. }) {
                    self.preview.panel_focused = true;
                    Command::CancelHide
                } else {
                    Command::None
                }
            }
            Message::PreviewPanelBlurred => {
                self.preview.panel_focused = false;
                match self.preview.phase {
                    PreviewPhase::Shown { index } if index != self.search.selected_index => {
                        Command::StartHide
                    }
                    _ => Command::None,
                }
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    // --- query input / autocomplete ---

    fn on_query_edited(&mut self, text: String) -> Command {
        self.search.input = text;
        let mut cmds = Vec::new();
        // Editing resumes; a dwell waiting to pop a preview mid-edit is
        // cancelled, and an already-issued fetch is orphaned.
        if matches!(self.preview.phase, PreviewPhase::Pending { .. }) {
            self.preview.phase = PreviewPhase::Idle;
            self.preview.pending_fetch = None;
            cmds.push(Command::CancelDwell);
        }
        // Suggestions are fetched for the trailing whitespace-delimited
        // token only, on every keystroke.
        let token = match self.search.input.rfind(' ') {
            Some(pos) => &self.search.input[pos + 1..],
            None => self.search.input.as_str(),
        };
        let token = token.trim();
        if token.is_empty() {
            self.hide_suggestions();
            return Command::Many(cmds);
        }
        self.suggest.latest_seq += 1;
        cmds.push(Command::FetchSuggestions {
            token: token.to_string(),
            seq: self.suggest.latest_seq,
        });
        Command::Many(cmds)
    }

    fn on_suggestions_loaded(&mut self, seq: u64, items: Vec<String>) -> Command {
        if seq != self.suggest.latest_seq {
            // A newer request is outstanding (or answered); this response is stale.
            return Command::None;
        }
        // Zero or one candidate is not worth a dropdown.
        if items.len() <= 1 {
            self.hide_suggestions();
            return Command::None;
        }
        self.suggest.items = items;
        self.suggest.visible = true;
        self.suggest.active = None;
        Command::None
    }

    fn on_suggestion_move(&mut self, direction: i32) -> Command {
        if !self.suggest.visible || self.suggest.items.is_empty() {
            return Command::None;
        }
        let len = self.suggest.items.len();
        self.suggest.active = Some(match (self.suggest.active, direction) {
            (None, d) if d > 0 => 0,
            (Some(i), d) if d > 0 => if i + 1 >= len { 0 } else { i + 1 },
            (None, _) | (Some(0), _) => len - 1,
            (Some(i), _) => i - 1,
        });
        Command::None
    }

    fn on_suggestion_accepted(&mut self) -> Command {
        let Some(active) = self.suggest.active else {
            return Command::None;
        };
        let Some(chosen) = self.suggest.items.get(active).cloned() else {
            return Command::None;
        };
        // Replace only the trailing token, keeping everything before the
        // last space (including that space) intact.
        self.search.input = match self.search.input.rfind(' ') {
            Some(pos) => format!("{}{}", &self.search.input[..=pos], chosen),
            None => chosen,
        };
        self.hide_suggestions();
        Command::None
    }

    fn hide_suggestions(&mut self) {
        self.suggest.items.clear();
        self.suggest.visible = false;
        self.suggest.active = None;
    }

    // --- pagination ---

    fn on_search_submitted(&mut self) -> Command {
        let query = self.search.input.trim().to_string();
        self.hide_suggestions();
        if query.is_empty() {
            return Command::ShowMessage("Please enter a search term".to_string());
        }

        self.search.query = query;
        self.search.results.clear();
        self.search.selected_index = 0;
        self.search.page_index = 0;
        self.search.search_active = true;
        self.search.end_reached = false;
        self.search.fetch_in_flight = true;
        self.search.current_page_id += 1;
        self.ui.is_loading = true;
        self.ui.message = None;

        self.preview.phase = PreviewPhase::Idle;
        self.preview.pending_fetch = None;
        self.preview.content = None;
        self.preview.panel_focused = false;

        Command::Many(vec![
            Command::CancelDwell,
            Command::CancelHide,
            Command::FetchPage { reset: true },
        ])
    }

    fn on_page_loaded(&mut self, id: u64, reset: bool, items: Vec<ResultItem>) -> Command {
        if id != self.search.current_page_id {
            // Response from a session that has since been reset.
            return Command::None;
        }
        self.search.fetch_in_flight = false;
        self.ui.is_loading = false;
        // The page index advances by exactly one per successful fetch,
        // independent of how many results came back.
        self.search.page_index += 1;
        if items.is_empty() {
            self.search.end_reached = true;
            if reset {
                tracing::info!(query = %self.search.query, "search returned no results");
            }
            return Command::None;
        }
        self.search.results.extend(items);
        if reset {
            // The selection rests on the first result of a fresh page, so
            // its dwell starts now rather than on the first key press.
            self.preview.phase = PreviewPhase::Pending { index: 0 };
            return Command::RestartDwell(0);
        }
        Command::None
    }

    fn on_page_failed(&mut self, id: u64, error: String) -> Command {
        if id != self.search.current_page_id {
            return Command::None;
        }
        // Roll back to a retryable state: in-flight cleared, page index
        // untouched so the same offset is fetched on retry.
        self.search.fetch_in_flight = false;
        self.ui.is_loading = false;
        tracing::warn!(error, "search page fetch failed");
        Command::ShowMessage("Failed to fetch search results".to_string())
    }

    /// The empty state is shown once an active search has settled with no
    /// results. `end_reached` only flips on a successful fetch, so a failed
    /// initial fetch keeps the idle placeholder instead.
    pub fn shows_empty_state(&self) -> bool {
        self.search.search_active
            && !self.search.fetch_in_flight
            && self.search.results.is_empty()
            && self.search.end_reached
    }

    fn maybe_fetch_next_page(&mut self, cmds: &mut Vec<Command>) {
        // Continuation guard: an active search, nothing in flight, and the
        // backend not yet exhausted. A trigger while a fetch is in flight is
        // dropped, never queued.
        if self.search.search_active && !self.search.fetch_in_flight && !self.search.end_reached {
            self.search.fetch_in_flight = true;
            self.search.current_page_id += 1;
            cmds.push(Command::FetchPage { reset: false });
        }
    }

    // --- selection / preview ---

    fn on_select_result(&mut self, index: usize) -> Command {
        if index >= self.search.results.len() {
            return Command::None;
        }
        // Moving into the result list dismisses the dropdown, like a click
        // outside the search box.
        if self.suggest.visible {
            self.hide_suggestions();
        }
        let mut cmds = Vec::new();
        let selection_changed = index != self.search.selected_index;
        self.search.selected_index = index;

        match self.preview.phase {
            // No dwell pending and no panel up for this result: start one
            // even if the selection did not move (selecting an idle result
            // again restarts its dwell, e.g. after a failed preview).
            PreviewPhase::Idle => {
                self.preview.phase = PreviewPhase::Pending { index };
                cmds.push(Command::RestartDwell(index));
            }
            PreviewPhase::Pending { .. } if selection_changed => {
                // Left the previous result before its timer fired: the
                // restart below cancels it, so no fetch is ever issued.
                self.preview.phase = PreviewPhase::Pending { index };
                cmds.push(Command::RestartDwell(index));
            }
            PreviewPhase::Shown { index: shown } if selection_changed && shown == index => {
                // Back on the result whose panel is already up; keep it.
                cmds.push(Command::CancelHide);
            }
            PreviewPhase::Shown { .. } if selection_changed => {
                cmds.push(Command::StartHide);
                cmds.push(Command::RestartDwell(index));
            }
            _ => {}
        }

        if index + SCROLL_BOTTOM_EPSILON >= self.search.results.len() {
            self.maybe_fetch_next_page(&mut cmds);
        }
        Command::Many(cmds)
    }

    fn on_dwell_elapsed(&mut self, index: usize) -> Command {
        if index != self.search.selected_index {
            return Command::None;
        }
        let Some(item) = self.search.results.get(index) else {
            return Command::None;
        };
        self.preview.pending_fetch = Some(index);
        Command::FetchPreview {
            index,
            row_key: item.row_key.clone(),
        }
    }

    fn on_preview_loaded(&mut self, index: usize, row_key: String, text: String) -> Command {
        if self.preview.pending_fetch != Some(index) || self.search.selected_index != index {
            // The selection moved on while this fetch was in flight.
            return Command::None;
        }
        let still_there = self
            .search
            .results
            .get(index)
            .is_some_and(|item| item.row_key == row_key);
        if !still_there {
            // The result at this index is no longer the one fetched for.
            self.preview.pending_fetch = None;
            return Command::None;
        }
        self.preview.pending_fetch = None;
        // One panel: re-triggering replaces its content in place.
        self.preview.phase = PreviewPhase::Shown { index };
        self.preview.content = Some(text);
        Command::CancelHide
    }

    fn on_preview_failed(&mut self, index: usize, error: String) -> Command {
        if self.preview.pending_fetch != Some(index) {
            return Command::None;
        }
        self.preview.pending_fetch = None;
        if !matches!(self.preview.phase, PreviewPhase::Shown { .. }) {
            self.preview.phase = PreviewPhase::Idle;
        }
        tracing::warn!(error, "preview fetch failed");
        Command::ShowMessage("Failed to fetch preview".to_string())
    }
}
