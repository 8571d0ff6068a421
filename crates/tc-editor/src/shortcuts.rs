//! Keyboard shortcut mapping for the text-entry field.
//!
//! Enter commits the pending text instead of inserting a newline. The
//! command-key combos mirror the toolbar buttons.

use crate::input::Modifiers;

/// Actions that keys in the text field can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Submit,
    Undo,
    Redo,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Submit => "submit",
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::ToggleBold => "bold",
            ShortcutAction::ToggleItalic => "italic",
            ShortcutAction::ToggleUnderline => "underline",
        }
    }
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a `KeyboardEvent.key` value plus modifiers to an action.
    /// Returns `None` if the combo has no binding; the host should then
    /// let the key through to the field.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if key == "Enter" {
            return Some(ShortcutAction::Submit);
        }

        if !modifiers.command() {
            return None;
        }

        if modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        match key {
            "z" | "Z" => Some(ShortcutAction::Undo),
            "y" | "Y" => Some(ShortcutAction::Redo),
            "b" | "B" => Some(ShortcutAction::ToggleBold),
            "i" | "I" => Some(ShortcutAction::ToggleItalic),
            "u" | "U" => Some(ShortcutAction::ToggleUnderline),
            _ => None,
        }
    }
}
