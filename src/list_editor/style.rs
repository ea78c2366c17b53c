//! Terminal styling for the list editor view.
//!
//! These styles only affect [`ListEditor::view`](super::ListEditor::view).
//! The class strings in [`Options`](super::Options) are attached to nodes
//! for hosts that style by class and have no effect here.

use lipgloss_extras::prelude::*;

/// Marker drawn before the focused line.
pub const FOCUS_MARKER: &str = "›";

/// Lipgloss styles for every element the terminal view draws.
#[derive(Debug, Clone)]
pub struct EditorStyles {
    /// Text fields.
    pub input: Style,
    /// Placeholder text in an empty field.
    pub placeholder: Style,
    /// The field that has focus.
    pub focused_input: Style,
    /// Buttons.
    pub button: Style,
    /// The button that has focus.
    pub focused_button: Style,
    /// Checkbox glyph.
    pub checkbox: Style,
    /// Label of a checked item.
    pub checked_content: Style,
    /// Label of an unchecked item.
    pub content: Style,
    /// The focus marker.
    pub focus_marker: Style,
    /// Plain text such as section titles.
    pub text: Style,
}

impl Default for EditorStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            input: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            placeholder: Style::new().foreground(subdued.clone()),
            focused_input: Style::new().foreground(accent.clone()).underline(true),
            button: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 1, 0, 1),
            focused_button: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            checkbox: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            checked_content: Style::new().foreground(subdued),
            content: Style::new(),
            focus_marker: Style::new().foreground(accent).bold(true),
            text: Style::new().bold(true),
        }
    }
}
