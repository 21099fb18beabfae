use crate::client::ResultItem;
use crate::interactive::ui::app_state::{AppState, PreviewPhase};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

fn items(n: usize) -> Vec<ResultItem> {
    (0..n)
        .map(|i| ResultItem {
            hostname: format!("host{i}.example"),
            url: format!("https://host{i}.example/page"),
            title: format!("Title {i}"),
            snippet: format!("Snippet {i}"),
            row_key: format!("rk-{i}"),
        })
        .collect()
}

fn leaves(cmd: Command) -> Vec<Command> {
    cmd.into_leaves()
}

/// Submit a query and deliver the first page, leaving a settled session.
fn state_with_results(n: usize) -> AppState {
    let mut state = AppState::new();
    state.update(Message::QueryEdited("rust".to_string()));
    state.update(Message::SearchSubmitted);
    let id = state.search.current_page_id;
    state.update(Message::PageLoaded {
        id,
        reset: true,
        items: items(n),
    });
    state
}

mod pagination {
    use super::*;

    #[test]
    fn submit_resets_page_index_and_issues_one_fetch() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("rust async".to_string()));
        let cmds = leaves(state.update(Message::SearchSubmitted));

        assert_eq!(state.search.page_index, 0);
        assert_eq!(state.search.query, "rust async");
        assert!(state.search.search_active);
        assert!(state.search.fetch_in_flight);
        assert!(state.ui.is_loading);
        assert_eq!(
            cmds.iter()
                .filter(|c| matches!(c, Command::FetchPage { .. }))
                .count(),
            1
        );
        assert!(cmds.contains(&Command::FetchPage { reset: true }));
    }

    #[test]
    fn empty_query_issues_no_fetch_and_prompts() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("   ".to_string()));
        let cmds = leaves(state.update(Message::SearchSubmitted));

        assert!(!state.search.search_active);
        assert!(!state.search.fetch_in_flight);
        assert!(
            cmds.iter()
                .all(|c| !matches!(c, Command::FetchPage { .. }))
        );
        assert!(matches!(cmds.as_slice(), [Command::ShowMessage(_)]));
    }

    #[test]
    fn resubmit_clears_previous_results() {
        let mut state = state_with_results(10);
        assert_eq!(state.search.results.len(), 10);

        state.update(Message::QueryEdited("other".to_string()));
        state.update(Message::SearchSubmitted);
        assert!(state.search.results.is_empty());
        assert_eq!(state.search.page_index, 0);
        assert_eq!(state.search.selected_index, 0);
    }

    #[test]
    fn page_index_increments_by_one_per_successful_fetch() {
        let mut state = state_with_results(10);
        assert_eq!(state.search.page_index, 1);

        // Continuation with fewer results than a full page still counts once.
        state.update(Message::SelectResult(9));
        let id = state.search.current_page_id;
        state.update(Message::PageLoaded {
            id,
            reset: false,
            items: items(3),
        });
        assert_eq!(state.search.page_index, 2);
        assert_eq!(state.search.results.len(), 13);
    }

    #[test]
    fn near_bottom_selection_triggers_continuation() {
        let mut state = state_with_results(10);
        let cmds = leaves(state.update(Message::SelectResult(9)));
        assert!(cmds.contains(&Command::FetchPage { reset: false }));
        assert!(state.search.fetch_in_flight);
    }

    #[test]
    fn selection_far_from_bottom_does_not_fetch() {
        let mut state = state_with_results(10);
        let cmds = leaves(state.update(Message::SelectResult(3)));
        assert!(
            cmds.iter()
                .all(|c| !matches!(c, Command::FetchPage { .. }))
        );
    }

    #[test]
    fn no_second_fetch_while_one_is_in_flight() {
        let mut state = state_with_results(10);
        let cmds = leaves(state.update(Message::SelectResult(9)));
        assert!(cmds.contains(&Command::FetchPage { reset: false }));

        // Another scroll into the bottom region while in flight: suppressed.
        let cmds = leaves(state.update(Message::SelectResult(8)));
        assert!(
            cmds.iter()
                .all(|c| !matches!(c, Command::FetchPage { .. }))
        );
    }

    #[test]
    fn empty_continuation_page_stops_further_probing() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(9));
        let id = state.search.current_page_id;
        state.update(Message::PageLoaded {
            id,
            reset: false,
            items: vec![],
        });
        assert!(state.search.end_reached);
        assert_eq!(state.search.page_index, 2);

        let cmds = leaves(state.update(Message::SelectResult(8)));
        let cmds2 = leaves(state.update(Message::SelectResult(9)));
        assert!(
            cmds.iter()
                .chain(cmds2.iter())
                .all(|c| !matches!(c, Command::FetchPage { .. }))
        );

        // A new search clears the flag.
        state.update(Message::QueryEdited("fresh".to_string()));
        state.update(Message::SearchSubmitted);
        assert!(!state.search.end_reached);
    }

    #[test]
    fn empty_reset_page_shows_empty_state() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("nohits".to_string()));
        state.update(Message::SearchSubmitted);
        let id = state.search.current_page_id;
        state.update(Message::PageLoaded {
            id,
            reset: true,
            items: vec![],
        });
        assert!(state.shows_empty_state());
        assert!(!state.ui.is_loading);
    }

    #[test]
    fn failed_initial_fetch_does_not_show_the_empty_state() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("rust".to_string()));
        state.update(Message::SearchSubmitted);
        let id = state.search.current_page_id;
        state.update(Message::PageFailed {
            id,
            error: "connection refused".to_string(),
        });

        // No page was ever received, so "No results found." would lie.
        assert!(!state.shows_empty_state());
        assert!(state.search.search_active);
        assert!(state.search.results.is_empty());
    }

    #[test]
    fn failure_rolls_back_without_advancing_page_index() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("rust".to_string()));
        state.update(Message::SearchSubmitted);
        let id = state.search.current_page_id;
        let cmds = leaves(state.update(Message::PageFailed {
            id,
            error: "connection refused".to_string(),
        }));

        assert!(!state.search.fetch_in_flight);
        assert!(!state.ui.is_loading);
        assert_eq!(state.search.page_index, 0);
        assert!(state.search.search_active);
        assert!(matches!(cmds.as_slice(), [Command::ShowMessage(_)]));
    }

    #[test]
    fn retry_after_failure_fetches_same_offset() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(9));
        let id = state.search.current_page_id;
        state.update(Message::PageFailed {
            id,
            error: "timeout".to_string(),
        });
        assert_eq!(state.search.page_index, 1);

        // Re-triggering the same scroll action retries page 1.
        let cmds = leaves(state.update(Message::SelectResult(9)));
        assert!(cmds.contains(&Command::FetchPage { reset: false }));
        assert_eq!(state.search.page_index, 1);
    }

    #[test]
    fn stale_page_response_from_superseded_session_is_dropped() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("first".to_string()));
        state.update(Message::SearchSubmitted);
        let old_id = state.search.current_page_id;

        state.update(Message::QueryEdited("second".to_string()));
        state.update(Message::SearchSubmitted);

        state.update(Message::PageLoaded {
            id: old_id,
            reset: true,
            items: items(10),
        });
        assert!(state.search.results.is_empty());
        assert!(state.search.fetch_in_flight);
    }

    #[test]
    fn loading_indicator_brackets_initial_fetch_only() {
        let mut state = state_with_results(10);
        assert!(!state.ui.is_loading);

        state.update(Message::SelectResult(9));
        assert!(state.search.fetch_in_flight);
        assert!(!state.ui.is_loading);
    }
}

mod autocomplete {
    use super::*;

    #[test]
    fn fetches_trailing_token_only() {
        let mut state = AppState::new();
        let cmds = leaves(state.update(Message::QueryEdited("new yo".to_string())));
        assert_eq!(
            cmds,
            vec![Command::FetchSuggestions {
                token: "yo".to_string(),
                seq: 1,
            }]
        );
    }

    #[test]
    fn whole_input_is_the_token_when_no_space() {
        let mut state = AppState::new();
        let cmds = leaves(state.update(Message::QueryEdited("rust".to_string())));
        assert_eq!(
            cmds,
            vec![Command::FetchSuggestions {
                token: "rust".to_string(),
                seq: 1,
            }]
        );
    }

    #[test]
    fn blank_trailing_token_hides_list_without_fetching() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("new".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["news".to_string(), "newt".to_string()],
        });
        assert!(state.suggest.visible);

        let cmds = leaves(state.update(Message::QueryEdited("new ".to_string())));
        assert!(cmds.is_empty());
        assert!(!state.suggest.visible);
    }

    #[test]
    fn short_suggestion_lists_are_hidden() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec![],
        });
        assert!(!state.suggest.visible);

        state.update(Message::QueryEdited("york".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 2,
            items: vec!["york".to_string()],
        });
        assert!(!state.suggest.visible);
    }

    #[test]
    fn two_or_more_suggestions_show_with_no_active_selection() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["york".to_string(), "yonder".to_string()],
        });
        assert!(state.suggest.visible);
        assert_eq!(state.suggest.active, None);
        assert_eq!(state.suggest.items.len(), 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("y".to_string()));
        state.update(Message::QueryEdited("yo".to_string()));
        assert_eq!(state.suggest.latest_seq, 2);

        // The slow response for "y" arrives after "yo" was issued.
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["yes".to_string(), "yet".to_string()],
        });
        assert!(!state.suggest.visible);

        state.update(Message::SuggestionsLoaded {
            seq: 2,
            items: vec!["york".to_string(), "yonder".to_string()],
        });
        assert_eq!(state.suggest.items, vec!["york", "yonder"]);
    }

    #[test]
    fn arrow_down_wraps_through_the_list() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        });

        state.update(Message::SuggestionMoveDown);
        assert_eq!(state.suggest.active, Some(0));
        state.update(Message::SuggestionMoveDown);
        assert_eq!(state.suggest.active, Some(1));
        state.update(Message::SuggestionMoveDown);
        assert_eq!(state.suggest.active, Some(2));
        state.update(Message::SuggestionMoveDown);
        assert_eq!(state.suggest.active, Some(0));
    }

    #[test]
    fn arrow_up_wraps_through_the_list() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        });

        state.update(Message::SuggestionMoveUp);
        assert_eq!(state.suggest.active, Some(2));
        state.update(Message::SuggestionMoveUp);
        assert_eq!(state.suggest.active, Some(1));
        state.update(Message::SuggestionMoveUp);
        assert_eq!(state.suggest.active, Some(0));
        state.update(Message::SuggestionMoveUp);
        assert_eq!(state.suggest.active, Some(2));
    }

    #[test]
    fn acceptance_replaces_only_the_trailing_token() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("new yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["york".to_string(), "yonder".to_string()],
        });
        state.update(Message::SuggestionMoveDown);
        state.update(Message::SuggestionAccepted);

        assert_eq!(state.search.input, "new york");
        assert!(!state.suggest.visible);
        assert!(state.suggest.items.is_empty());
    }

    #[test]
    fn acceptance_replaces_whole_input_when_single_token() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["york".to_string(), "yonder".to_string()],
        });
        state.update(Message::SuggestionMoveUp);
        state.update(Message::SuggestionAccepted);
        assert_eq!(state.search.input, "yonder");
    }

    #[test]
    fn escape_hides_the_list() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["a".to_string(), "b".to_string()],
        });
        state.update(Message::SuggestionDismissed);
        assert!(!state.suggest.visible);
        assert_eq!(state.suggest.active, None);
    }

    #[test]
    fn moving_into_results_hides_the_list() {
        let mut state = state_with_results(10);
        state.update(Message::QueryEdited("more yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: state.suggest.latest_seq,
            items: vec!["york".to_string(), "yonder".to_string()],
        });
        assert!(state.suggest.visible);

        state.update(Message::SelectResult(1));
        assert!(!state.suggest.visible);
    }

    #[test]
    fn submit_hides_the_list() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["a".to_string(), "b".to_string()],
        });
        state.update(Message::SearchSubmitted);
        assert!(!state.suggest.visible);
    }

    #[test]
    fn fetch_failure_hides_the_list_quietly() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("yo".to_string()));
        state.update(Message::SuggestionsLoaded {
            seq: 1,
            items: vec!["a".to_string(), "b".to_string()],
        });
        let cmds = leaves(state.update(Message::SuggestionsFailed { seq: 1 }));
        assert!(cmds.is_empty());
        assert!(!state.suggest.visible);
    }
}

mod preview {
    use super::*;

    #[test]
    fn moving_selection_starts_a_dwell_timer() {
        let mut state = state_with_results(10);
        let cmds = leaves(state.update(Message::SelectResult(1)));
        assert!(cmds.contains(&Command::RestartDwell(1)));
        assert_eq!(state.preview.phase, PreviewPhase::Pending { index: 1 });
    }

    #[test]
    fn fresh_page_starts_the_dwell_for_the_first_result() {
        let mut state = AppState::new();
        state.update(Message::QueryEdited("rust".to_string()));
        state.update(Message::SearchSubmitted);
        let id = state.search.current_page_id;
        let cmds = leaves(state.update(Message::PageLoaded {
            id,
            reset: true,
            items: items(10),
        }));

        // The selection rests on result 0; its preview must be reachable
        // without first navigating away and back.
        assert!(cmds.contains(&Command::RestartDwell(0)));
        assert_eq!(state.preview.phase, PreviewPhase::Pending { index: 0 });

        let cmds = leaves(state.update(Message::PreviewDwellElapsed(0)));
        assert_eq!(
            cmds,
            vec![Command::FetchPreview {
                index: 0,
                row_key: "rk-0".to_string(),
            }]
        );
    }

    #[test]
    fn reselecting_an_idle_result_restarts_its_dwell() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));
        state.update(Message::PreviewFailed {
            index: 1,
            error: "timeout".to_string(),
        });
        assert_eq!(state.preview.phase, PreviewPhase::Idle);

        // Same selection, but nothing pending and no panel up: retry works.
        let cmds = leaves(state.update(Message::SelectResult(1)));
        assert!(cmds.contains(&Command::RestartDwell(1)));
        assert_eq!(state.preview.phase, PreviewPhase::Pending { index: 1 });
    }

    #[test]
    fn editing_the_query_cancels_a_pending_dwell() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(2));
        assert_eq!(state.preview.phase, PreviewPhase::Pending { index: 2 });

        let cmds = leaves(state.update(Message::QueryEdited("rust more".to_string())));
        assert!(cmds.contains(&Command::CancelDwell));
        assert_eq!(state.preview.phase, PreviewPhase::Idle);

        // A fetch the dwell already issued is orphaned too.
        state.update(Message::PreviewLoaded {
            index: 2,
            row_key: "rk-2".to_string(),
            text: "late".to_string(),
        });
        assert!(state.preview.content.is_none());
    }

    #[test]
    fn editing_leaves_a_shown_panel_alone() {
        let mut state = shown_preview_state();
        let cmds = leaves(state.update(Message::QueryEdited("rust more".to_string())));
        assert!(!cmds.contains(&Command::CancelDwell));
        assert_eq!(state.preview.phase, PreviewPhase::Shown { index: 1 });
    }

    #[test]
    fn preview_for_a_replaced_result_is_dropped() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));

        // The row key no longer matches the result at that index.
        state.update(Message::PreviewLoaded {
            index: 1,
            row_key: "rk-stale".to_string(),
            text: "other page".to_string(),
        });
        assert!(state.preview.content.is_none());
        assert!(state.preview.pending_fetch.is_none());
        assert!(!matches!(state.preview.phase, PreviewPhase::Shown { .. }));
    }

    #[test]
    fn leaving_before_dwell_fires_issues_no_fetch() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        let cmds = leaves(state.update(Message::SelectResult(2)));
        assert!(cmds.contains(&Command::RestartDwell(2)));

        // A late timer event for the abandoned target does nothing.
        let cmds = leaves(state.update(Message::PreviewDwellElapsed(1)));
        assert!(cmds.is_empty());
    }

    #[test]
    fn dwell_elapsed_issues_one_fetch_for_the_row_key() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        let cmds = leaves(state.update(Message::PreviewDwellElapsed(1)));
        assert_eq!(
            cmds,
            vec![Command::FetchPreview {
                index: 1,
                row_key: "rk-1".to_string(),
            }]
        );
        assert_eq!(state.preview.pending_fetch, Some(1));
    }

    #[test]
    fn loaded_preview_is_shown_for_the_current_target() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));
        let cmds = leaves(state.update(Message::PreviewLoaded {
            index: 1,
            row_key: "rk-1".to_string(),
            text: "cached page text".to_string(),
        }));

        assert_eq!(state.preview.phase, PreviewPhase::Shown { index: 1 });
        assert_eq!(state.preview.content.as_deref(), Some("cached page text"));
        assert!(cmds.contains(&Command::CancelHide));
    }

    #[test]
    fn preview_for_an_abandoned_target_is_dropped() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));
        state.update(Message::SelectResult(2));

        state.update(Message::PreviewLoaded {
            index: 1,
            row_key: "rk-1".to_string(),
            text: "stale".to_string(),
        });
        assert!(state.preview.content.is_none());
        assert!(!matches!(state.preview.phase, PreviewPhase::Shown { .. }));
    }

    #[test]
    fn leaving_a_shown_preview_starts_the_hide_timer() {
        let mut state = shown_preview_state();
        let cmds = leaves(state.update(Message::SelectResult(2)));
        assert!(cmds.contains(&Command::StartHide));
        assert!(cmds.contains(&Command::RestartDwell(2)));
        // Panel stays up until the hide timer fires.
        assert_eq!(state.preview.phase, PreviewPhase::Shown { index: 1 });
    }

    #[test]
    fn returning_to_the_shown_result_cancels_the_hide_timer() {
        let mut state = shown_preview_state();
        state.update(Message::SelectResult(2));
        let cmds = leaves(state.update(Message::SelectResult(1)));
        assert!(cmds.contains(&Command::CancelHide));
        assert_eq!(state.preview.phase, PreviewPhase::Shown { index: 1 });
    }

    #[test]
    fn hide_elapsed_returns_to_idle_and_drops_content() {
        let mut state = shown_preview_state();
        state.update(Message::SelectResult(2));
        state.update(Message::PreviewHideElapsed);
        assert_eq!(state.preview.phase, PreviewPhase::Idle);
        assert!(state.preview.content.is_none());
    }

    #[test]
    fn focusing_the_panel_cancels_the_hide_timer() {
        let mut state = shown_preview_state();
        state.update(Message::SelectResult(2));
        let cmds = leaves(state.update(Message::PreviewPanelFocused));
        assert!(cmds.contains(&Command::CancelHide));
        assert!(state.preview.panel_focused);

        let cmds = leaves(state.update(Message::PreviewPanelBlurred));
        assert!(cmds.contains(&Command::StartHide));
        assert!(!state.preview.panel_focused);
    }

    #[test]
    fn blur_with_selection_on_shown_result_keeps_the_panel() {
        let mut state = shown_preview_state();
        state.update(Message::PreviewPanelFocused);
        let cmds = leaves(state.update(Message::PreviewPanelBlurred));
        assert!(cmds.is_empty());
        assert_eq!(state.preview.phase, PreviewPhase::Shown { index: 1 });
    }

    #[test]
    fn failed_preview_returns_to_idle_with_an_alert() {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));
        let cmds = leaves(state.update(Message::PreviewFailed {
            index: 1,
            error: "timeout".to_string(),
        }));

        assert_eq!(state.preview.phase, PreviewPhase::Idle);
        assert!(state.preview.pending_fetch.is_none());
        assert!(matches!(cmds.as_slice(), [Command::ShowMessage(_)]));
    }

    #[test]
    fn new_search_resets_preview_state() {
        let mut state = shown_preview_state();
        state.update(Message::QueryEdited("other".to_string()));
        let cmds = leaves(state.update(Message::SearchSubmitted));
        assert_eq!(state.preview.phase, PreviewPhase::Idle);
        assert!(state.preview.content.is_none());
        assert!(cmds.contains(&Command::CancelDwell));
        assert!(cmds.contains(&Command::CancelHide));
    }

    /// A session with the panel shown for result 1.
    fn shown_preview_state() -> AppState {
        let mut state = state_with_results(10);
        state.update(Message::SelectResult(1));
        state.update(Message::PreviewDwellElapsed(1));
        state.update(Message::PreviewLoaded {
            index: 1,
            row_key: "rk-1".to_string(),
            text: "cached page text".to_string(),
        });
        state
    }
}
