use crate::client::ResultItem;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Query input events
    QueryEdited(String),
    SearchSubmitted,

    // Pagination events
    PageLoaded {
        id: u64,
        reset: bool,
        items: Vec<ResultItem>,
    },
    PageFailed {
        id: u64,
        error: String,
    },

    // Autocomplete events
    SuggestionsLoaded {
        seq: u64,
        items: Vec<String>,
    },
    SuggestionsFailed {
        seq: u64,
    },
    SuggestionMoveDown,
    SuggestionMoveUp,
    SuggestionAccepted,
    SuggestionDismissed,

    // Result list events
    SelectResult(usize),

    // Preview events
    PreviewDwellElapsed(usize),
    PreviewLoaded {
        index: usize,
        row_key: String,
        text: String,
    },
    PreviewFailed {
        index: usize,
        error: String,
    },
    PreviewHideElapsed,
    PreviewPanelFocused,
    PreviewPanelBlurred,

    // UI events
    ClearStatus,
}
