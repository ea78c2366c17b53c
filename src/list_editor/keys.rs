//! Key bindings for driving the list editor from a terminal.
//!
//! - **Focus**: `tab` (next), `shift+tab` (previous)
//! - **Buttons and rows**: `enter`/`space` click the focused node
//! - **Fields**: `enter` submits, `backspace` deletes, `esc` cancels an
//!   inline edit

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings used by [`ListEditor::update`](super::ListEditor::update).
#[derive(Debug, Clone)]
pub struct EditorKeyMap {
    /// Move focus to the next focusable node.
    pub next_focus: key::Binding,
    /// Move focus to the previous focusable node.
    pub prev_focus: key::Binding,
    /// Click the focused button or row.
    pub activate: key::Binding,
    /// Submit the focused field.
    pub submit: key::Binding,
    /// Leave the focused inline editor without saving.
    pub cancel: key::Binding,
    /// Delete the grapheme before the end of the focused field.
    pub delete_backward: key::Binding,
}

impl Default for EditorKeyMap {
    fn default() -> Self {
        Self {
            next_focus: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next"),
            prev_focus: key::Binding::new(vec![KeyCode::BackTab]).with_help("shift+tab", "prev"),
            activate: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter/space", "press"),
            submit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit"),
            cancel: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel edit"),
            delete_backward: key::Binding::new(vec![KeyCode::Backspace])
                .with_help("backspace", "delete"),
        }
    }
}

impl key::KeyMap for EditorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_focus, &self.activate, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next_focus, &self.prev_focus],
            vec![&self.activate, &self.submit, &self.cancel, &self.delete_backward],
        ]
    }
}
