//! Model mutations.
//!
//! Every operation except [`ListEditor::filter`] works on the canonical
//! sequence and ends with a full render of it, so an active filter view is
//! dropped by any other action. Rejected input (blank text, unknown ids) is
//! silent: nothing changes and nothing is rendered.

use super::types::{InputRole, Item, ItemId};
use super::ListEditor;
use crate::surface::Surface;
use tracing::{debug, trace, warn};

impl<S: Surface> ListEditor<S> {
    /// Appends `text.trim()` as a new item, clears the add field and renders.
    ///
    /// The new item gets the next id from this editor's counter. Ids are
    /// never handed out twice, even after the item that held one is deleted.
    /// Since the render is unfiltered, any filter view in place is dropped.
    ///
    /// Returns the new id, or `None` when the trimmed text is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_list_editor::list_editor::ListEditor;
    ///
    /// let mut editor = ListEditor::with_tree(["milk"]);
    ///
    /// let bread = editor.add_item("  bread ").unwrap();
    /// assert_eq!(editor.item(bread).unwrap().content(), "bread");
    ///
    /// // Blank text is ignored.
    /// assert!(editor.add_item("   ").is_none());
    /// assert_eq!(editor.len(), 2);
    /// ```
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        let content = text.trim();
        if content.is_empty() {
            trace!("ignoring blank add");
            return None;
        }

        let id = self.ids.next_id();
        self.items.push(Item::new(id, content));
        self.clear_input(InputRole::AddItem);
        debug!(%id, len = self.items.len(), "item added");

        self.render(None);
        Some(id)
    }

    /// Removes the item and detaches its row right away, without a full
    /// render. Returns `false` if no item has that id.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            trace!(%id, "delete of unknown item");
            return false;
        };

        let item = self.items.remove(index);
        let h = item.handles;
        for node in [h.node, h.selection].into_iter().flatten() {
            if let Err(err) = self.surface.remove(node) {
                warn!(%id, %err, "node already detached");
            }
        }
        self.listeners.retain(|_, listener| listener.item() != Some(id));
        self.visible.retain(|v| *v != id);
        self.settle_focus();

        debug!(%id, len = self.items.len(), "item deleted");
        true
    }

    /// Renders only the items whose content contains `text`, ignoring case.
    /// An empty filter shows everything. The canonical sequence is untouched.
    ///
    /// The filtered view lasts until the next mutation, which renders the
    /// full list again. Items left out have no handles until then.
    ///
    /// Returns the number of rows rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_list_editor::list_editor::ListEditor;
    ///
    /// let mut editor = ListEditor::with_tree(["Milk", "bread", "Breadcrumbs"]);
    ///
    /// assert_eq!(editor.filter("BREAD"), 2);
    /// assert_eq!(editor.visible_ids().len(), 2);
    /// assert_eq!(editor.len(), 3); // the items themselves are kept
    ///
    /// assert_eq!(editor.filter(""), 3);
    /// ```
    pub fn filter(&mut self, text: &str) -> usize {
        debug!(filter = text, "filtering items");
        self.render(Some(text));
        self.visible.len()
    }

    /// Puts the item into editing mode and renders.
    pub fn toggle_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item_mut(id) else {
            trace!(%id, "edit of unknown item");
            return false;
        };
        item.editing = true;
        debug!(%id, "editing item");

        self.render(None);
        true
    }

    /// Stores `text.trim()` as the item's content, leaves editing mode and
    /// renders. Blank text is rejected and the item stays in editing mode.
    pub fn save_edit(&mut self, id: ItemId, text: &str) -> bool {
        let content = text.trim();
        if content.is_empty() {
            trace!(%id, "ignoring blank save");
            return false;
        }
        let Some(item) = self.item_mut(id) else {
            trace!(%id, "save of unknown item");
            return false;
        };
        item.content = content.to_string();
        item.editing = false;
        debug!(%id, "item saved");

        self.render(None);
        true
    }

    /// Leaves editing mode without touching the content and renders.
    pub fn cancel_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item_mut(id) else {
            trace!(%id, "cancel of unknown item");
            return false;
        };
        item.editing = false;
        debug!(%id, "edit cancelled");

        self.render(None);
        true
    }

    /// Flips the item's checked flag and renders.
    pub fn toggle_checked(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item_mut(id) else {
            trace!(%id, "toggle of unknown item");
            return false;
        };
        item.checked = !item.checked;
        debug!(%id, checked = item.checked, "item toggled");

        self.render(None);
        true
    }

    fn clear_input(&mut self, role: InputRole) {
        if let Some(handles) = self.inputs.get(role) {
            if let Err(err) = self.surface.set_value(handles.input, "") {
                warn!(?role, %err, "could not clear input");
            }
        }
    }
}
