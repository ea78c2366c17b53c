//! Editable list component: add, delete, edit, filter and check items.
//!
//! The component has two halves:
//!
//! - [`ListEditor`] owns the canonical item sequence, hands out stable
//!   [`ItemId`]s and turns user intents into model mutations.
//! - [`Renderer`] projects a sequence of items into a
//!   [`Surface`](crate::surface::Surface), replacing
//!   whatever was mounted before, and records handles to the interactive
//!   nodes it creates.
//!
//! ## Render cycle
//!
//! Every mutation ends with a full rebuild of the subtree under the mount
//! point. Afterwards the editor rebinds its listener table to the handles the
//! renderer wrote. Nothing from an earlier cycle survives: old nodes are
//! freed, their [`NodeId`](crate::surface::NodeId)s go stale, and their
//! listeners are dropped. The one exception is [`ListEditor::delete_item`],
//! which detaches a single row in place.
//!
//! Text typed into the add and filter fields is carried over by role, so
//! checking an item does not wipe a half-typed filter.
//!
//! ## Filtering
//!
//! [`ListEditor::filter`] renders a case-insensitive substring match of the
//! canonical sequence. The filtered view lasts for one render only: any other
//! action re-renders the full list.
//!
//! ## Driving the editor
//!
//! Pointer hosts send [`Event`]s to [`ListEditor::dispatch`]. Terminal hosts
//! forward bubbletea messages to [`ListEditor::update`] and draw
//! [`ListEditor::view`].
//!
//! ```
//! use bubbletea_list_editor::list_editor::{Event, InputRole, ListEditor};
//!
//! let mut editor = ListEditor::with_tree(["milk", "bread"]);
//!
//! let add = editor.input_handles(InputRole::AddItem).unwrap();
//! editor.dispatch(Event::Input { target: add.input, value: "eggs".into() });
//! editor.dispatch(Event::Click(add.button));
//!
//! let contents: Vec<_> = editor.items().iter().map(|i| i.content()).collect();
//! assert_eq!(contents, ["milk", "bread", "eggs"]);
//! assert_eq!(editor.input_value(InputRole::AddItem), "");
//! ```

pub mod keys;
pub mod options;
pub mod style;

mod api;
mod events;
mod model;
mod renderer;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

pub use keys::EditorKeyMap;
pub use model::ListEditor;
pub use options::{
    ClassNames, ClassNamesOverride, InputOptions, InputOptionsOverride, Inputs, InputsOverride,
    Labels, LabelsOverride, Options, OptionsOverride, DEFAULT_OPTIONS,
};
pub use renderer::Renderer;
pub use style::EditorStyles;
pub use types::{
    Event, FocusKey, InputHandles, InputRegistry, InputRole, Item, ItemHandles, ItemId,
};

use crate::surface::{NodeId, SurfaceError};
use thiserror::Error;

/// Errors returned by the list editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The mount point is not a live node of the surface.
    #[error("mount point {0} is not a live node")]
    InvalidMount(NodeId),
    /// A surface primitive failed while rendering.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
