//! The `ListEditor` struct, construction, accessors and the render cycle.

use super::events::Listener;
use super::keys::EditorKeyMap;
use super::options::Options;
use super::renderer::Renderer;
use super::style::EditorStyles;
use super::types::{FocusKey, IdGenerator, InputHandles, InputRegistry, InputRole, Item, ItemId};
use super::Error;
use crate::surface::{NodeId, Surface, Tree};
use std::collections::HashMap;
use tracing::{debug, error};

/// An editable, filterable, checkable list mounted into a [`Surface`].
///
/// The editor owns the canonical item sequence and, for its lifetime, every
/// child of the mount point. Each mutation re-renders the whole subtree and
/// rebinds listeners to the fresh nodes; deleting an item is the only
/// operation that edits the tree in place.
///
/// # Examples
///
/// ```
/// use bubbletea_list_editor::list_editor::{ListEditor, Options};
/// use bubbletea_list_editor::surface::{Surface, Tag, Tree};
///
/// let mut tree = Tree::new();
/// let mount = tree.create_node(Tag::Div);
/// let mut editor = ListEditor::new(["milk", "bread"], tree, mount, Options::default()).unwrap();
///
/// editor.add_item("eggs");
/// assert_eq!(editor.len(), 3);
///
/// editor.filter("re");
/// assert_eq!(editor.visible_ids().len(), 1);
/// assert_eq!(editor.len(), 3);
/// ```
pub struct ListEditor<S: Surface = Tree> {
    pub(super) surface: S,
    pub(super) mount: NodeId,
    pub(super) items: Vec<Item>,
    pub(super) ids: IdGenerator,
    pub(super) renderer: Renderer,
    pub(super) inputs: InputRegistry,
    pub(super) listeners: HashMap<NodeId, Listener>,
    pub(super) visible: Vec<ItemId>,

    // Terminal front
    pub(super) focus: Option<FocusKey>,
    pub(super) focused: bool,
    pub(super) keymap: EditorKeyMap,
    pub(super) styles: EditorStyles,
}

impl<S: Surface> ListEditor<S> {
    /// Builds one item per seed string, in order, and performs the first render.
    ///
    /// The editor takes ownership of `surface` and of every child of
    /// `mount`: existing children are removed by the first render. Use
    /// [`ListEditor::with_tree`] for a fresh [`Tree`](crate::surface::Tree).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMount`] if `mount` is not a live node of `surface`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_list_editor::list_editor::{ListEditor, Options};
    /// use bubbletea_list_editor::surface::{Surface, Tag, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let mount = tree.create_node(Tag::Div);
    ///
    /// let editor = ListEditor::new(["milk", "bread"], tree, mount, Options::default()).unwrap();
    /// assert_eq!(editor.len(), 2);
    /// assert_eq!(editor.render_cycle(), 1);
    /// ```
    pub fn new<I, T>(items: I, surface: S, mount: NodeId, options: Options) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if !surface.contains(mount) {
            return Err(Error::InvalidMount(mount));
        }
        let mut editor = Self::assemble(items, surface, mount, options);
        editor.try_render(None)?;
        debug!(len = editor.items.len(), %mount, "list editor mounted");
        Ok(editor)
    }

    pub(super) fn assemble<I, T>(items: I, surface: S, mount: NodeId, options: Options) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut ids = IdGenerator::default();
        let items: Vec<Item> = items
            .into_iter()
            .map(|content| Item::new(ids.next_id(), content))
            .collect();

        Self {
            surface,
            mount,
            items,
            ids,
            renderer: Renderer::new(options),
            inputs: InputRegistry::default(),
            listeners: HashMap::new(),
            visible: Vec::new(),
            focus: None,
            focused: false,
            keymap: EditorKeyMap::default(),
            styles: EditorStyles::default(),
        }
    }

    /// Replaces the key bindings used by [`update`](Self::update).
    pub fn with_keymap(mut self, keymap: EditorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the terminal styles used by [`view`](Self::view).
    pub fn with_styles(mut self, styles: EditorStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The canonical item sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of items in the canonical sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the canonical sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the rows currently on screen, in order.
    pub fn visible_ids(&self) -> &[ItemId] {
        &self.visible
    }

    /// Contents of checked items in canonical order.
    ///
    /// This reads the items, not the tree, so it also counts checked items
    /// hidden by a filter.
    ///
    /// ```
    /// use bubbletea_list_editor::list_editor::ListEditor;
    ///
    /// let mut editor = ListEditor::with_tree(["milk", "bread", "eggs"]);
    /// let ids: Vec<_> = editor.items().iter().map(|i| i.id()).collect();
    /// editor.toggle_checked(ids[2]);
    /// editor.toggle_checked(ids[0]);
    ///
    /// assert_eq!(editor.selection(), ["milk", "eggs"]);
    /// ```
    pub fn selection(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.content.as_str())
            .collect()
    }

    /// Text currently typed into a top input.
    pub fn input_value(&self, role: InputRole) -> &str {
        self.inputs
            .get(role)
            .and_then(|h| self.surface.value(h.input))
            .unwrap_or_default()
    }

    /// Live handles of a top input and its submit button.
    pub fn input_handles(&self, role: InputRole) -> Option<InputHandles> {
        self.inputs.get(role)
    }

    /// The mount point.
    pub fn mount(&self) -> NodeId {
        self.mount
    }

    /// The surface the editor renders into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. for typing into inputs.
    ///
    /// Children of the mount point belong to the editor and must not be
    /// restructured through this.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Gives the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The configuration in use.
    pub fn options(&self) -> &Options {
        self.renderer.options()
    }

    /// Number of full renders performed so far.
    pub fn render_cycle(&self) -> u64 {
        self.renderer.cycle()
    }

    /// The key bindings.
    pub fn keymap(&self) -> &EditorKeyMap {
        &self.keymap
    }

    pub(super) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Full render of the canonical list, or of the items matching `filter`,
    /// followed by a complete listener rebind.
    pub(super) fn try_render(&mut self, filter: Option<&str>) -> Result<(), Error> {
        let needle = filter.map(str::to_lowercase).unwrap_or_default();
        for item in &mut self.items {
            item.handles = Default::default();
        }

        self.renderer.render(
            &mut self.surface,
            self.mount,
            self.items.iter_mut().filter(|i| i.matches_filter(&needle)),
            &mut self.inputs,
        )?;

        self.visible = self
            .items
            .iter()
            .filter(|i| i.handles.node.is_some())
            .map(|i| i.id)
            .collect();
        self.subscribe();
        self.settle_focus();
        Ok(())
    }

    pub(super) fn render(&mut self, filter: Option<&str>) {
        if let Err(err) = self.try_render(filter) {
            error!(%err, "list editor render failed");
        }
    }
}
