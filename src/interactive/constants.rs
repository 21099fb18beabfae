//! Timing and layout constants for the interactive session.

// Timing constants
/// Dwell time on a result before its preview fetch is issued, in milliseconds
pub const PREVIEW_DWELL_MS: u64 = 500;

/// Delay before a shown preview is hidden after the selection leaves, in milliseconds
pub const PREVIEW_HIDE_MS: u64 = 300;

/// Alert/status auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Pagination
/// Results requested per page fetch
pub const RESULTS_PER_PAGE: usize = 10;

/// A continuation fetch fires when the selection is within this many rows
/// of the last loaded result
pub const SCROLL_BOTTOM_EPSILON: usize = 2;

// UI Layout constants
/// Maximum visible suggestion rows in the autocomplete dropdown
pub const SUGGESTION_LIST_MAX_ROWS: u16 = 8;

/// Page size for PageUp/PageDown navigation in the result list
pub const PAGE_JUMP: usize = 10;
