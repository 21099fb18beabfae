#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Issue a page fetch for the current query at the current page offset.
    FetchPage {
        reset: bool,
    },
    /// Issue an autocomplete fetch for one token, tagged with its sequence id.
    FetchSuggestions {
        token: String,
        seq: u64,
    },
    /// Issue a preview fetch for the result at `index`.
    FetchPreview {
        index: usize,
        row_key: String,
    },
    /// (Re)start the preview dwell timer for the result at `index`.
    /// Starting the timer for a new target cancels any previous one.
    RestartDwell(usize),
    CancelDwell,
    /// Start the delayed-hide timer for the shown preview panel.
    StartHide,
    CancelHide,
    /// Surface a user-visible alert/prompt, auto-cleared after a delay.
    ShowMessage(String),
    Many(Vec<Command>),
}

impl Command {
    /// Flatten this command into its leaf commands, for assertions in tests
    /// and uniform execution in the runtime.
    pub fn into_leaves(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Many(cmds) => cmds
                .into_iter()
                .flat_map(|c| c.into_leaves().into_iter())
                .collect(),
            leaf => vec![leaf],
        }
    }
}
