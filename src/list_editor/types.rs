//! Core types for the list editor: items, their ids and node handles, the
//! input registry and the events hosts dispatch.

use crate::surface::NodeId;
use std::fmt;

/// Stable identity of an item.
///
/// Assigned once at creation and never reused, so it stays valid while the
/// item's position changes under filtering and deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source scoped to one editor instance.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

/// Handles into the most recent render of an item's row.
///
/// These are non-owning. They are cleared before every render and refilled
/// by the renderer for the rows it builds, so an item filtered out of the
/// last render has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemHandles {
    /// The row (`li`) node.
    pub node: Option<NodeId>,
    /// Delete button, viewing mode only.
    pub delete: Option<NodeId>,
    /// Edit button, viewing mode only.
    pub edit: Option<NodeId>,
    /// Save button, editing mode only.
    pub save: Option<NodeId>,
    /// Cancel button, editing mode only.
    pub cancel: Option<NodeId>,
    /// Inline edit input, editing mode only.
    pub input: Option<NodeId>,
    /// Row checkbox.
    pub checkbox: Option<NodeId>,
    /// Entry in the selection section, checked items only.
    pub selection: Option<NodeId>,
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) content: String,
    pub(crate) checked: bool,
    pub(crate) editing: bool,
    pub(crate) handles: ItemHandles,
}

impl Item {
    pub(crate) fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            checked: false,
            editing: false,
            handles: ItemHandles::default(),
        }
    }

    /// Stable id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Label text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Selection flag.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Whether the row shows the inline editor.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Node handles from the latest render.
    pub fn handles(&self) -> &ItemHandles {
        &self.handles
    }

    /// Case-insensitive substring match used by the filter.
    pub(crate) fn matches_filter(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.content.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Logical role of a top input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// The add-item field.
    AddItem,
    /// The filter field.
    FilterItems,
}

/// Live handles for one top input and its submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandles {
    /// The text field.
    pub input: NodeId,
    /// The submit button.
    pub button: NodeId,
}

/// Latest handles per input role, overwritten on every render.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRegistry {
    add_item: Option<InputHandles>,
    filter_items: Option<InputHandles>,
}

impl InputRegistry {
    /// Handles recorded for `role` by the latest render.
    pub fn get(&self, role: InputRole) -> Option<InputHandles> {
        match role {
            InputRole::AddItem => self.add_item,
            InputRole::FilterItems => self.filter_items,
        }
    }

    pub(crate) fn set(&mut self, role: InputRole, handles: InputHandles) {
        match role {
            InputRole::AddItem => self.add_item = Some(handles),
            InputRole::FilterItems => self.filter_items = Some(handles),
        }
    }
}

/// A user interaction delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A click on `target`. Bubbles to ancestors until a listener takes it.
    Click(NodeId),
    /// The user changed the text of an input.
    Input {
        /// The input node.
        target: NodeId,
        /// Its new value.
        value: String,
    },
}

/// Focus position keyed by logical role, so it survives re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusKey {
    /// A top input field.
    Input(InputRole),
    /// A top submit button.
    Submit(InputRole),
    /// An item row.
    Row(ItemId),
    /// An item's edit button.
    Edit(ItemId),
    /// An item's delete button.
    Delete(ItemId),
    /// An item's inline edit input.
    EditInput(ItemId),
    /// An item's save button.
    Save(ItemId),
    /// An item's cancel button.
    Cancel(ItemId),
}

impl FocusKey {
    pub(crate) fn item(self) -> Option<ItemId> {
        match self {
            FocusKey::Input(_) | FocusKey::Submit(_) => None,
            FocusKey::Row(id)
            | FocusKey::Edit(id)
            | FocusKey::Delete(id)
            | FocusKey::EditInput(id)
            | FocusKey::Save(id)
            | FocusKey::Cancel(id) => Some(id),
        }
    }
}
