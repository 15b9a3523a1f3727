//! Find-bar actions independent of key bindings.

/// Domain-level find-bar actions that can be mapped to configurable bindings.
///
/// These represent user intent, not specific keys. The mapping from typed
/// command to `FindAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindAction {
    /// Move to the next match. Default: n (an empty line also maps here)
    NextMatch,
    /// Move to the previous match. Default: p
    PrevMatch,
    /// Toggle case-sensitive matching. Default: c
    ToggleCase,
    /// Toggle whole-word matching (turns regex off). Default: w
    ToggleWholeWord,
    /// Toggle regex matching (turns whole-word off). Default: r
    ToggleRegex,
    /// Re-run the current query against the current transcript. Default: .
    Refresh,
    /// Hide the find bar and end the session. Default: q
    Close,
}

impl FindAction {
    /// Every action, in help-text order.
    pub const ALL: [FindAction; 7] = [
        FindAction::NextMatch,
        FindAction::PrevMatch,
        FindAction::ToggleCase,
        FindAction::ToggleWholeWord,
        FindAction::ToggleRegex,
        FindAction::Refresh,
        FindAction::Close,
    ];

    /// Short human-readable label for help output.
    pub fn label(self) -> &'static str {
        match self {
            FindAction::NextMatch => "next occurrence",
            FindAction::PrevMatch => "previous occurrence",
            FindAction::ToggleCase => "match case",
            FindAction::ToggleWholeWord => "match word",
            FindAction::ToggleRegex => "regex",
            FindAction::Refresh => "refresh",
            FindAction::Close => "close",
        }
    }
}
