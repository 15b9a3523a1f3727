//! Find-bar command bindings.

use crate::config::KeyBindingsSection;
use crate::model::FindAction;
use std::collections::HashMap;
use tracing::warn;

/// Maps typed commands to find-bar actions.
///
/// Provides single-letter defaults with option to override via configuration.
/// Each action has exactly one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<String, FindAction>,
}

impl KeyBindings {
    /// Look up the action for a typed command.
    pub fn get(&self, key: &str) -> Option<FindAction> {
        self.bindings.get(key).copied()
    }

    /// The key currently bound to `action`.
    pub fn key_for(&self, action: FindAction) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
    }

    /// Bind `key` to `action`, replacing the action's previous key.
    ///
    /// If `key` was bound to another action, that action loses its binding.
    pub fn bind(&mut self, key: impl Into<String>, action: FindAction) {
        self.bindings.retain(|_, bound| *bound != action);
        self.bindings.insert(key.into(), action);
    }

    /// Apply the `[keybindings]` section of a config file.
    ///
    /// Blank keys are ignored.
    pub fn with_overrides(mut self, section: &KeyBindingsSection) -> Self {
        let overrides = [
            (&section.next, FindAction::NextMatch),
            (&section.previous, FindAction::PrevMatch),
            (&section.toggle_case, FindAction::ToggleCase),
            (&section.toggle_word, FindAction::ToggleWholeWord),
            (&section.toggle_regex, FindAction::ToggleRegex),
            (&section.refresh, FindAction::Refresh),
            (&section.close, FindAction::Close),
        ];

        for (key, action) in overrides {
            let Some(key) = key else { continue };
            let key = key.trim();
            if key.is_empty() {
                warn!(?action, "Ignoring blank key binding");
                continue;
            }
            self.bind(key, action);
        }
        self
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            ("n", FindAction::NextMatch),
            ("p", FindAction::PrevMatch),
            ("c", FindAction::ToggleCase),
            ("w", FindAction::ToggleWholeWord),
            ("r", FindAction::ToggleRegex),
            (".", FindAction::Refresh),
            ("q", FindAction::Close),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_string(), action))
        .collect();

        Self { bindings }
    }
}
