//! Terminal front: keyboard focus, key handling and the text view.
//!
//! Focus is stored as a [`FocusKey`], a logical role such as "the add field"
//! or "the edit button of item 3". It is resolved against the handles of
//! the latest render whenever it is used, so it survives full rebuilds.
//!
//! Keys are turned into the same [`Event`]s a pointer-driven host would send
//! and go through [`ListEditor::dispatch`].

use super::types::{Event, FocusKey, InputRole};
use super::ListEditor;
use crate::key::matches_binding;
use crate::surface::{self, NodeId, Surface, Tag, Tree};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

impl<S: Surface> ListEditor<S> {
    /// The focus position, if any.
    pub fn focus_key(&self) -> Option<FocusKey> {
        self.focus
    }

    /// The node the focus position resolves to in the current tree.
    pub fn focused_node(&self) -> Option<NodeId> {
        self.focus.and_then(|key| self.resolve(key))
    }

    /// Moves focus to `key` if it names a node in the current tree.
    pub fn set_focus_key(&mut self, key: FocusKey) -> bool {
        if self.resolve(key).is_some() {
            self.focus = Some(key);
            true
        } else {
            false
        }
    }

    /// Moves focus to the next focusable node, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Moves focus to the previous focusable node, wrapping around.
    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let len = order.len() as isize;
        let next = match self.focus.and_then(|f| order.iter().position(|k| *k == f)) {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.focus = Some(order[next as usize]);
    }

    /// Focusable roles in document order.
    fn focus_order(&self) -> Vec<FocusKey> {
        let mut order = vec![
            FocusKey::Input(InputRole::AddItem),
            FocusKey::Submit(InputRole::AddItem),
            FocusKey::Input(InputRole::FilterItems),
            FocusKey::Submit(InputRole::FilterItems),
        ];
        for id in &self.visible {
            let Some(item) = self.item(*id) else { continue };
            if item.editing {
                order.extend([
                    FocusKey::EditInput(item.id),
                    FocusKey::Save(item.id),
                    FocusKey::Cancel(item.id),
                ]);
            } else {
                order.extend([
                    FocusKey::Row(item.id),
                    FocusKey::Edit(item.id),
                    FocusKey::Delete(item.id),
                ]);
            }
        }
        order.retain(|key| self.resolve(*key).is_some());
        order
    }

    fn resolve(&self, key: FocusKey) -> Option<NodeId> {
        let node = match key {
            FocusKey::Input(role) => self.inputs.get(role).map(|h| h.input),
            FocusKey::Submit(role) => self.inputs.get(role).map(|h| h.button),
            FocusKey::Row(id) => self.item(id).and_then(|i| i.handles.node),
            FocusKey::Edit(id) => self.item(id).and_then(|i| i.handles.edit),
            FocusKey::Delete(id) => self.item(id).and_then(|i| i.handles.delete),
            FocusKey::EditInput(id) => self.item(id).and_then(|i| i.handles.input),
            FocusKey::Save(id) => self.item(id).and_then(|i| i.handles.save),
            FocusKey::Cancel(id) => self.item(id).and_then(|i| i.handles.cancel),
        }?;
        self.surface.contains(node).then_some(node)
    }

    /// Re-targets a focus position that no longer resolves: to the same
    /// item's row or inline editor if it is still shown, otherwise to the
    /// add field.
    pub(super) fn settle_focus(&mut self) {
        let Some(key) = self.focus else { return };
        if self.resolve(key).is_some() {
            return;
        }
        let fallback = key
            .item()
            .and_then(|id| self.item(id))
            .map(|item| {
                if item.editing {
                    FocusKey::EditInput(item.id)
                } else {
                    FocusKey::Row(item.id)
                }
            })
            .filter(|k| self.resolve(*k).is_some())
            .unwrap_or(FocusKey::Input(InputRole::AddItem));
        self.focus = self.resolve(fallback).map(|_| fallback);
    }

    /// Handles a bubbletea message. Only key messages are used, and only
    /// while the editor has focus.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.keymap.next_focus) {
            self.focus_next();
            return;
        }
        if matches_binding(key_msg, &self.keymap.prev_focus) {
            self.focus_prev();
            return;
        }

        let Some(key) = self.focus else {
            self.focus_next();
            return;
        };
        let Some(node) = self.resolve(key) else { return };

        match key {
            FocusKey::Input(role) => {
                if matches_binding(key_msg, &self.keymap.submit) {
                    if let Some(h) = self.inputs.get(role) {
                        self.dispatch(Event::Click(h.button));
                    }
                } else {
                    self.edit_field(node, key_msg);
                }
            }
            FocusKey::EditInput(id) => {
                let item = self.item(id).map(|i| i.handles);
                if matches_binding(key_msg, &self.keymap.submit) {
                    if let Some(save) = item.and_then(|h| h.save) {
                        self.dispatch(Event::Click(save));
                    }
                } else if matches_binding(key_msg, &self.keymap.cancel) {
                    if let Some(cancel) = item.and_then(|h| h.cancel) {
                        self.dispatch(Event::Click(cancel));
                    }
                } else {
                    self.edit_field(node, key_msg);
                }
            }
            _ => {
                if matches_binding(key_msg, &self.keymap.activate) {
                    self.dispatch(Event::Click(node));
                }
            }
        }
    }

    fn edit_field(&mut self, node: NodeId, key_msg: &KeyMsg) {
        let mut value = self.surface.value(node).unwrap_or_default().to_string();
        if matches_binding(key_msg, &self.keymap.delete_backward) {
            let last = value.grapheme_indices(true).next_back().map(|(start, _)| start);
            if let Some(start) = last {
                value.truncate(start);
            }
        } else if let KeyCode::Char(c) = key_msg.key {
            if key_msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return;
            }
            value.push(c);
        } else {
            return;
        }
        self.dispatch(Event::Input {
            target: node,
            value,
        });
    }

    /// Renders the mounted tree as terminal text.
    ///
    /// Each row, input line and block-level text node becomes one line. The
    /// focused line is marked with [`FOCUS_MARKER`](super::style::FOCUS_MARKER).
    pub fn view(&self) -> String {
        let mut lines = Vec::new();
        self.view_block(self.mount, &mut lines);
        lines.join("\n")
    }

    fn view_block(&self, node: NodeId, lines: &mut Vec<String>) {
        let children = self.surface.children(node);
        if node != self.mount && (children.is_empty() || self.is_line(node)) {
            let focused = self
                .focused_node()
                .is_some_and(|f| surface::ancestors(&self.surface, f).any(|n| n == node));
            let marker = if focused && self.focused {
                self.styles.focus_marker.render(super::style::FOCUS_MARKER)
            } else {
                " ".to_string()
            };
            let text = self.view_line(node);
            if !text.is_empty() {
                lines.push(format!("{marker} {text}"));
            }
            return;
        }
        for child in children {
            self.view_block(*child, lines);
        }
    }

    /// Rows are lines, as are containers whose nodes sit at most two levels
    /// down and that hold no list.
    fn is_line(&self, node: NodeId) -> bool {
        match self.surface.tag(node) {
            Some(Tag::Li) => true,
            Some(Tag::Div) => {
                self.subtree_height(node) <= 2
                    && surface::descendants(&self.surface, node)
                        .iter()
                        .all(|n| self.surface.tag(*n) != Some(Tag::Ul))
            }
            _ => false,
        }
    }

    fn subtree_height(&self, node: NodeId) -> usize {
        self.surface
            .children(node)
            .iter()
            .map(|c| 1 + self.subtree_height(*c))
            .max()
            .unwrap_or(0)
    }

    fn view_line(&self, node: NodeId) -> String {
        let checked = surface::descendants(&self.surface, node).iter().any(|n| {
            surface::is_checkbox(&self.surface, *n)
                && self.surface.attribute(*n, "checked").is_some()
        });
        let focused = if self.focused { self.focused_node() } else { None };

        surface::descendants(&self.surface, node)
            .into_iter()
            .filter(|n| self.surface.children(*n).is_empty())
            .filter_map(|leaf| self.view_leaf(leaf, checked, focused == Some(leaf)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn view_leaf(&self, leaf: NodeId, checked: bool, focused: bool) -> Option<String> {
        let styles = &self.styles;
        let text = self.surface.text(leaf).unwrap_or_default();
        let rendered = match self.surface.tag(leaf)? {
            Tag::Input if surface::is_checkbox(&self.surface, leaf) => {
                styles.checkbox.render(if checked { "[x]" } else { "[ ]" })
            }
            Tag::Input => {
                let value = self.surface.value(leaf).unwrap_or_default();
                let body = if focused {
                    styles.focused_input.render(&format!("{value}_"))
                } else if value.is_empty() {
                    let placeholder = self.surface.attribute(leaf, "placeholder");
                    styles.placeholder.render(placeholder.unwrap_or_default())
                } else {
                    styles.input.render(value)
                };
                format!("[{body}]")
            }
            Tag::Button if focused => styles.focused_button.render(text),
            Tag::Button => styles.button.render(&format!("<{text}>")),
            _ if text.is_empty() => return None,
            _ if checked => styles.checked_content.render(text),
            Tag::Span if self.surface.class(leaf).is_some_and(str::is_empty) => {
                styles.text.render(text)
            }
            _ => styles.content.render(text),
        };
        Some(rendered)
    }
}

impl<S: Surface> Component for ListEditor<S> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        if self.focused_node().is_none() {
            self.focus = None;
            self.focus_next();
        }
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl ListEditor<Tree> {
    /// An editor mounted on the root of a fresh [`Tree`], with default options.
    pub fn with_tree<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tree = Tree::new();
        let mount = tree.create_node(Tag::Div);
        let mut editor = Self::assemble(items, tree, mount, Default::default());
        editor.render(None);
        editor
    }
}

impl BubbleTeaModel for ListEditor<Tree> {
    fn init() -> (Self, Option<Cmd>) {
        let mut editor = ListEditor::with_tree(Vec::<String>::new());
        let cmd = editor.focus();
        (editor, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        ListEditor::update(self, msg)
    }

    fn view(&self) -> String {
        ListEditor::view(self)
    }
}

