#![warn(missing_docs)]

//! # bubbletea-list-editor
//!
//! An embeddable list-editing widget. Give it a few strings and a mount point
//! in a retained node tree, and it renders an editable, filterable,
//! checkable list with add, delete, edit and filter controls. After every
//! mutation the mounted subtree is rebuilt from the in-memory model.
//!
//! ## Overview
//!
//! - [`surface`]: the node tree the widget renders into. [`surface::Tree`]
//!   is the in-memory implementation; other toolkits can implement
//!   [`surface::Surface`].
//! - [`list_editor`]: the model/controller ([`ListEditor`]) and the
//!   full-rebuild [`list_editor::Renderer`].
//! - [`key`]: type-safe key bindings used by the terminal front.
//!
//! The editor follows the Elm Architecture used by bubbletea-rs. `update()`
//! takes key messages and `view()` draws the tree as terminal text, so it
//! can run as a bubbletea program or be embedded in a larger model.
//!
//! ## Focus Management
//!
//! ```rust
//! use bubbletea_list_editor::prelude::*;
//!
//! let mut editor = ListEditor::with_tree(["milk"]);
//! assert!(!editor.focused());
//!
//! editor.focus();
//! assert!(editor.focused());
//! assert_eq!(editor.focus_key(), Some(FocusKey::Input(InputRole::AddItem)));
//!
//! editor.blur();
//! assert!(!editor.focused());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_list_editor::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     groceries: ListEditor,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut groceries = ListEditor::with_tree(["milk", "bread"]);
//!         let cmd = groceries.focus();
//!         (Self { groceries }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.groceries.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n\ntab: next • enter: press", self.groceries.view())
//!     }
//! }
//! ```

pub mod key;
pub mod list_editor;
pub mod surface;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// - **Focused**: the component receives key input and shows where the
///   focus sits.
/// - **Blurred**: the component ignores key input.
pub trait Component {
    /// Gives the component focus. May return a command for the runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away.
    fn blur(&mut self);

    /// Whether the component is focused.
    fn focused(&self) -> bool;
}

pub use key::{matches, matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use list_editor::ListEditor;
pub use surface::{NodeId, Surface, SurfaceError, Tag, Tree};

/// Common imports.
///
/// ```rust
/// use bubbletea_list_editor::prelude::*;
///
/// let editor: ListEditor = ListEditor::with_tree(Vec::<String>::new());
/// assert!(editor.is_empty());
/// ```
pub mod prelude {
    pub use crate::key::{matches, matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::list_editor::{
        EditorKeyMap, EditorStyles, Event, FocusKey, InputRole, Item, ItemId, ListEditor, Options,
        OptionsOverride,
    };
    pub use crate::surface::{NodeId, Surface, Tag, Tree};
    pub use crate::Component;
}
