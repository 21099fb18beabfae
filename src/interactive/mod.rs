use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::ClientOptions;
use crate::client::RequestGateway;

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::query_service::QueryService;
use self::constants::*;
use self::domain::models::{
    PageRequest, PageResponse, PreviewRequest, PreviewResponse, SuggestRequest, SuggestResponse,
};
use self::ui::app_state::{AppState, PreviewPhase};
use self::ui::commands::Command;
use self::ui::components::Component;
use self::ui::events::Message;
use self::ui::renderer::Renderer;

/// Top-level coordinator for the interactive session.
///
/// Owns the event loop, the three fetch worker channels, and the cancellable
/// timers; all coordination state lives in [`AppState`] and is mutated only
/// through its message reducer.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    options: ClientOptions,
    page_tx: Option<Sender<PageRequest>>,
    page_rx: Option<Receiver<PageResponse>>,
    suggest_tx: Option<Sender<SuggestRequest>>,
    suggest_rx: Option<Receiver<SuggestResponse>>,
    preview_tx: Option<Sender<PreviewRequest>>,
    preview_rx: Option<Receiver<PreviewResponse>>,
    /// Preview dwell timer: (started, target result index).
    dwell_timer: Option<(Instant, usize)>,
    /// Delayed-hide timer for the shown preview panel.
    hide_timer: Option<Instant>,
    message_timer: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            options,
            page_tx: None,
            page_rx: None,
            suggest_tx: None,
            suggest_rx: None,
            preview_tx: None,
            preview_rx: None,
            dwell_timer: None,
            hide_timer: None,
            message_timer: None,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let gateway = RequestGateway::new(
            &self.options.endpoint,
            Duration::from_secs(self.options.timeout_secs),
        )?;
        let service = Arc::new(QueryService::new(gateway));

        // One worker per request category: pagination is serialized by the
        // in-flight guard, autocomplete and preview run independently.
        let (tx, rx) = start_worker(service.clone(), QueryService::fetch_page);
        self.page_tx = Some(tx);
        self.page_rx = Some(rx);
        let (tx, rx) = start_worker(service.clone(), QueryService::fetch_suggestions);
        self.suggest_tx = Some(tx);
        self.suggest_rx = Some(rx);
        let (tx, rx) = start_worker(service, QueryService::fetch_preview);
        self.preview_tx = Some(tx);
        self.preview_rx = Some(rx);

        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();
            self.check_timers();

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_input(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn drain_responses(&mut self) {
        let mut messages = Vec::new();

        if let Some(rx) = &self.page_rx {
            while let Ok(response) = rx.try_recv() {
                messages.push(match response.outcome {
                    Ok(items) => Message::PageLoaded {
                        id: response.id,
                        reset: response.reset,
                        items,
                    },
                    Err(e) => Message::PageFailed {
                        id: response.id,
                        error: e.to_string(),
                    },
                });
            }
        }
        if let Some(rx) = &self.suggest_rx {
            while let Ok(response) = rx.try_recv() {
                messages.push(match response.outcome {
                    Ok(items) => Message::SuggestionsLoaded {
                        seq: response.seq,
                        items,
                    },
                    Err(e) => {
                        tracing::debug!(error = %e, "autocomplete fetch failed");
                        Message::SuggestionsFailed { seq: response.seq }
                    }
                });
            }
        }
        if let Some(rx) = &self.preview_rx {
            while let Ok(response) = rx.try_recv() {
                messages.push(match response.outcome {
                    Ok(text) => Message::PreviewLoaded {
                        index: response.index,
                        row_key: response.row_key,
                        text,
                    },
                    Err(e) => Message::PreviewFailed {
                        index: response.index,
                        error: e.to_string(),
                    },
                });
            }
        }

        for msg in messages {
            self.handle_message(msg);
        }
    }

    fn check_timers(&mut self) {
        if let Some((started, index)) = self.dwell_timer {
            if started.elapsed() >= Duration::from_millis(PREVIEW_DWELL_MS) {
                self.dwell_timer = None;
                self.handle_message(Message::PreviewDwellElapsed(index));
            }
        }
        if let Some(started) = self.hide_timer {
            if started.elapsed() >= Duration::from_millis(PREVIEW_HIDE_MS) {
                self.hide_timer = None;
                self.handle_message(Message::PreviewHideElapsed);
            }
        }
        if let Some(started) = self.message_timer {
            if started.elapsed() >= Duration::from_millis(MESSAGE_CLEAR_DELAY_MS) {
                self.message_timer = None;
                self.handle_message(Message::ClearStatus);
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some("Press Ctrl+C again to exit".to_string());
            self.message_timer = Some(Instant::now());
            return Ok(false);
        }

        // While the preview panel has focus its keys stay inside it.
        if self.state.preview.panel_focused {
            if let Some(msg) = self.renderer.preview_popup_mut().handle_key(key) {
                self.handle_message(msg);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc if self.state.suggest.visible => {
                self.handle_message(Message::SuggestionDismissed);
            }
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab if matches!(self.state.preview.phase, PreviewPhase::Shown { .. }) => {
                self.handle_message(Message::PreviewPanelFocused);
            }
            _ => {
                if let Some(msg) = self.route_search_key(key) {
                    self.handle_message(msg);
                }
            }
        }
        Ok(false)
    }

    /// Dispatch a key to the right component: the dropdown steals navigation
    /// keys while visible, arrow keys drive the result list, Enter submits.
    fn route_search_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.state.suggest.visible {
            if let Some(msg) = self.renderer.suggestion_list_mut().handle_key(key) {
                return Some(msg);
            }
        }
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => self.renderer.result_list_mut().handle_key(key),
            KeyCode::Enter => Some(Message::SearchSubmitted),
            _ => self.renderer.search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        for cmd in command.into_leaves() {
            match cmd {
                Command::FetchPage { reset } => {
                    let offset = self.state.search.page_index * self.options.page_size;
                    tracing::info!(
                        query = %self.state.search.query,
                        offset,
                        reset,
                        "issuing page fetch"
                    );
                    if let Some(tx) = &self.page_tx {
                        let _ = tx.send(PageRequest {
                            id: self.state.search.current_page_id,
                            query: self.state.search.query.clone(),
                            offset,
                            reset,
                        });
                    }
                }
                Command::FetchSuggestions { token, seq } => {
                    if let Some(tx) = &self.suggest_tx {
                        let _ = tx.send(SuggestRequest { seq, token });
                    }
                }
                Command::FetchPreview { index, row_key } => {
                    tracing::info!(row_key, "issuing preview fetch");
                    if let Some(tx) = &self.preview_tx {
                        let _ = tx.send(PreviewRequest { index, row_key });
                    }
                }
                Command::RestartDwell(index) => {
                    self.dwell_timer = Some((Instant::now(), index));
                }
                Command::CancelDwell => {
                    self.dwell_timer = None;
                }
                Command::StartHide => {
                    self.hide_timer = Some(Instant::now());
                }
                Command::CancelHide => {
                    self.hide_timer = None;
                }
                Command::ShowMessage(msg) => {
                    self.state.ui.message = Some(msg);
                    self.message_timer = Some(Instant::now());
                }
                Command::None | Command::Many(_) => {}
            }
        }
    }
}

/// Spawn a worker thread serving one request category over mpsc channels.
fn start_worker<Req, Res, F>(
    service: Arc<QueryService>,
    handler: F,
) -> (Sender<Req>, Receiver<Res>)
where
    Req: Send + 'static,
    Res: Send + 'static,
    F: Fn(&QueryService, Req) -> Res + Send + 'static,
{
    let (request_tx, request_rx) = mpsc::channel::<Req>();
    let (response_tx, response_rx) = mpsc::channel::<Res>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            if response_tx.send(handler(&service, request)).is_err() {
                break;
            }
        }
    });

    (request_tx, response_rx)
}
