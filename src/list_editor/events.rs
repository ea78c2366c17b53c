//! Listener binding and event dispatch.
//!
//! After every render the listener table is rebuilt from scratch out of the
//! handles the renderer just wrote. Nodes from the previous cycle are freed,
//! so their entries are dropped with the old table and an event aimed at one
//! finds nothing.

use super::types::{Event, InputRole, ItemId};
use super::ListEditor;
use crate::surface::{self, NodeId, Surface, Tag};
use tracing::trace;

/// Action bound to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Listener {
    Add,
    Filter,
    Delete(ItemId),
    Edit(ItemId),
    Save(ItemId),
    Cancel(ItemId),
    Row(ItemId),
}

impl Listener {
    pub(super) fn item(self) -> Option<ItemId> {
        match self {
            Listener::Add | Listener::Filter => None,
            Listener::Delete(id)
            | Listener::Edit(id)
            | Listener::Save(id)
            | Listener::Cancel(id)
            | Listener::Row(id) => Some(id),
        }
    }
}

impl<S: Surface> ListEditor<S> {
    pub(super) fn subscribe(&mut self) {
        self.listeners.clear();

        if let Some(add) = self.inputs.get(InputRole::AddItem) {
            self.listeners.insert(add.button, Listener::Add);
        }
        if let Some(filter) = self.inputs.get(InputRole::FilterItems) {
            self.listeners.insert(filter.button, Listener::Filter);
        }

        for item in &self.items {
            let h = item.handles;
            let id = item.id;
            let bound = [
                (h.node, Listener::Row(id)),
                (h.delete, Listener::Delete(id)),
                (h.edit, Listener::Edit(id)),
                (h.save, Listener::Save(id)),
                (h.cancel, Listener::Cancel(id)),
            ];
            for (node, listener) in bound {
                if let Some(node) = node {
                    self.listeners.insert(node, listener);
                }
            }
        }
        trace!(listeners = self.listeners.len(), "listeners bound");
    }

    /// Delivers a host event.
    ///
    /// A click walks from its target up through the ancestors and runs the
    /// first listener it meets. Clicking a row toggles it, except when the
    /// click landed on a button or the row is being edited. Input events
    /// store the new text in the target field.
    ///
    /// Returns `true` if a listener ran or an input took the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_list_editor::list_editor::{Event, InputRole, ListEditor};
    ///
    /// let mut editor = ListEditor::with_tree(["milk"]);
    /// let add = editor.input_handles(InputRole::AddItem).unwrap();
    ///
    /// editor.dispatch(Event::Input { target: add.input, value: "eggs".into() });
    /// assert!(editor.dispatch(Event::Click(add.button)));
    /// assert_eq!(editor.items()[1].content(), "eggs");
    ///
    /// // The old button was freed by the render, so nothing answers it.
    /// assert!(!editor.dispatch(Event::Click(add.button)));
    /// ```
    pub fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::Click(target) => self.click(target),
            Event::Input { target, value } => self.input(target, &value),
        }
    }

    fn click(&mut self, target: NodeId) -> bool {
        let Some(listener) = surface::ancestors(&self.surface, target)
            .find_map(|node| self.listeners.get(&node).copied())
        else {
            trace!(%target, "click without listener");
            return false;
        };

        match listener {
            Listener::Add => {
                let text = self.input_value(InputRole::AddItem).to_string();
                self.add_item(&text);
            }
            Listener::Filter => {
                let text = self.input_value(InputRole::FilterItems).to_string();
                self.filter(&text);
            }
            Listener::Delete(id) => {
                self.delete_item(id);
            }
            Listener::Edit(id) => {
                self.toggle_edit(id);
            }
            Listener::Save(id) => {
                let text = self
                    .item(id)
                    .and_then(|i| i.handles.input)
                    .and_then(|input| self.surface.value(input))
                    .unwrap_or_default()
                    .to_string();
                self.save_edit(id, &text);
            }
            Listener::Cancel(id) => {
                self.cancel_edit(id);
            }
            Listener::Row(id) => {
                let on_button = self.surface.tag(target) == Some(Tag::Button);
                let editing = self.item(id).is_some_and(|i| i.editing);
                if on_button || editing {
                    trace!(%id, on_button, editing, "row click ignored");
                    return false;
                }
                self.toggle_checked(id);
            }
        }
        true
    }

    fn input(&mut self, target: NodeId, value: &str) -> bool {
        let text_field = self.surface.tag(target) == Some(Tag::Input)
            && !surface::is_checkbox(&self.surface, target);
        if !text_field {
            return false;
        }
        self.surface.set_value(target, value).is_ok()
    }
}
