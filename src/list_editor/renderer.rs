//! Full-rebuild projection of items into the surface.
//!
//! Each [`Renderer::render`] call throws away everything under the mount
//! point and builds it again. Handles are written back as nodes are created:
//! per item into [`Item::handles`], per top input into the [`InputRegistry`].
//! Handles from earlier cycles point at freed nodes afterwards.

use super::options::{InputOptions, Options};
use super::types::{InputHandles, InputRegistry, InputRole, Item};
use crate::surface::{NodeId, Surface, SurfaceError, Tag};
use tracing::debug;

/// Builds the editor's node tree.
#[derive(Debug, Clone)]
pub struct Renderer {
    options: Options,
    cycle: u64,
}

impl Renderer {
    /// Creates a renderer for the given configuration.
    pub fn new(options: Options) -> Self {
        Self { options, cycle: 0 }
    }

    /// The configuration in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of completed renders.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Replaces the subtree under `mount` with a fresh projection of `items`.
    ///
    /// Values typed into the add and filter inputs are carried over from the
    /// nodes recorded in `registry` to their replacements.
    ///
    /// The selection section follows the rendered view: it lists the checked
    /// items among `items` only, so a checked item hidden by a filter is left
    /// out of it until the next unfiltered render. Each entry's node is
    /// recorded in [`ItemHandles::selection`](super::ItemHandles::selection).
    pub fn render<'a, S, I>(
        &mut self,
        surface: &mut S,
        mount: NodeId,
        items: I,
        registry: &mut InputRegistry,
    ) -> Result<(), SurfaceError>
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = &'a mut Item>,
    {
        let add_value = preserved_value(surface, registry, InputRole::AddItem);
        let filter_value = preserved_value(surface, registry, InputRole::FilterItems);

        surface.clear_children(mount)?;

        let mut b = Builder {
            surface,
            options: &self.options,
        };

        let wrapper = b.node(Tag::Div, &b.options.class_names.wrapper)?;
        let top = b.node(Tag::Div, &b.options.class_names.top_section)?;
        let inputs = b.node(Tag::Div, &b.options.class_names.inputs_section)?;

        let (add_row, add) = b.input(&b.options.inputs.add_item, &add_value)?;
        let (filter_row, filter) = b.input(&b.options.inputs.filter_items, &filter_value)?;
        registry.set(InputRole::AddItem, add);
        registry.set(InputRole::FilterItems, filter);
        b.append(inputs, &[add_row, filter_row])?;
        b.append(top, &[inputs])?;

        let main = b.node(Tag::Div, &b.options.class_names.main_section)?;
        let list_section = b.node(Tag::Div, &b.options.class_names.list_section)?;
        let list = b.node(Tag::Ul, &b.options.class_names.list)?;

        let mut rows = 0usize;
        let mut selected = Vec::new();
        for item in items {
            let row = b.item(item)?;
            b.append(list, &[row])?;
            if item.checked {
                selected.push(item);
            }
            rows += 1;
        }
        b.append(list_section, &[list])?;

        let selection = b.selection(&mut selected)?;
        b.append(main, &[list_section, selection])?;
        b.append(wrapper, &[top, main])?;
        b.append(mount, &[wrapper])?;

        self.cycle += 1;
        debug!(cycle = self.cycle, rows, selected = selected.len(), "rendered list editor");
        Ok(())
    }
}

fn preserved_value<S: Surface + ?Sized>(
    surface: &S,
    registry: &InputRegistry,
    role: InputRole,
) -> String {
    registry
        .get(role)
        .and_then(|h| surface.value(h.input))
        .unwrap_or_default()
        .to_string()
}

struct Builder<'r, S: ?Sized> {
    surface: &'r mut S,
    options: &'r Options,
}

impl<S: Surface + ?Sized> Builder<'_, S> {
    fn node(&mut self, tag: Tag, class: &str) -> Result<NodeId, SurfaceError> {
        let node = self.surface.create_node(tag);
        self.surface.set_class(node, class)?;
        Ok(node)
    }

    fn text_node(&mut self, tag: Tag, class: &str, text: &str) -> Result<NodeId, SurfaceError> {
        let node = self.node(tag, class)?;
        self.surface.set_text(node, text)?;
        Ok(node)
    }

    fn append(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(), SurfaceError> {
        for child in children {
            self.surface.append_child(parent, *child)?;
        }
        Ok(())
    }

    fn input(
        &mut self,
        input: &InputOptions,
        value: &str,
    ) -> Result<(NodeId, InputHandles), SurfaceError> {
        let classes = &self.options.class_names;
        let wrapper = self.node(Tag::Div, &classes.input_wrapper)?;

        let container = self.node(Tag::Div, &classes.input_container)?;
        let field = self.node(Tag::Input, &classes.input)?;
        self.surface.set_attribute(field, "name", &input.name)?;
        self.surface.set_attribute(field, "placeholder", &input.placeholder)?;
        self.surface.set_attribute(field, "data-input", &input.input_name)?;
        self.surface.set_value(field, value)?;
        self.append(container, &[field])?;

        let button_container = self.node(Tag::Div, &classes.submit_button_container)?;
        let button = self.text_node(Tag::Button, &classes.submit_button, &input.button_content)?;
        self.append(button_container, &[button])?;

        self.append(wrapper, &[container, button_container])?;
        Ok((
            wrapper,
            InputHandles {
                input: field,
                button,
            },
        ))
    }

    fn item(&mut self, item: &mut Item) -> Result<NodeId, SurfaceError> {
        let classes = &self.options.class_names;
        let row = self.node(Tag::Li, &classes.item)?;
        self.surface.set_attribute(row, "data-id", &item.id.to_string())?;
        item.handles.node = Some(row);

        let wrapper = self.node(Tag::Div, &classes.item_wrapper)?;
        let content = self.content(item)?;
        let controls = if item.editing {
            self.editing_controls(item)?
        } else {
            self.viewing_controls(item)?
        };
        self.append(wrapper, &[content, controls])?;
        self.append(row, &[wrapper])?;
        Ok(row)
    }

    fn content(&mut self, item: &mut Item) -> Result<NodeId, SurfaceError> {
        let classes = &self.options.class_names;
        let container = self.node(Tag::Div, &classes.item_content_container)?;

        let checkbox = self.node(Tag::Input, &classes.item_checkbox)?;
        self.surface.set_attribute(checkbox, "type", "checkbox")?;
        if item.checked {
            self.surface.set_attribute(checkbox, "checked", "")?;
        }
        item.handles.checkbox = Some(checkbox);

        let body = if item.editing {
            let input = self.node(Tag::Input, &classes.input)?;
            self.surface.set_value(input, &item.content)?;
            item.handles.input = Some(input);
            input
        } else {
            self.text_node(Tag::Span, &classes.item_content, &item.content)?
        };

        self.append(container, &[checkbox, body])?;
        Ok(container)
    }

    fn viewing_controls(&mut self, item: &mut Item) -> Result<NodeId, SurfaceError> {
        let classes = &self.options.class_names;
        let labels = &self.options.labels;
        let group = self.node(Tag::Div, &classes.buttons_container)?;
        self.surface.set_attribute(group, "role", "group")?;
        self.surface.set_attribute(group, "aria-label", &labels.buttons_aria_label)?;

        let edit = self.text_node(Tag::Button, &classes.edit_btn, &labels.edit_btn)?;
        let delete = self.text_node(Tag::Button, &classes.delete_btn, &labels.delete_btn)?;
        self.append(group, &[edit, delete])?;

        item.handles.edit = Some(edit);
        item.handles.delete = Some(delete);
        Ok(group)
    }

    fn editing_controls(&mut self, item: &mut Item) -> Result<NodeId, SurfaceError> {
        let classes = &self.options.class_names;
        let labels = &self.options.labels;
        let group = self.node(Tag::Div, &classes.editing_buttons_container)?;
        self.surface.set_attribute(group, "role", "group")?;
        self.surface
            .set_attribute(group, "aria-label", &labels.editing_buttons_aria_label)?;

        let save = self.text_node(Tag::Button, &classes.save_btn, &labels.save_btn)?;
        let cancel = self.text_node(Tag::Button, &classes.cancel_btn, &labels.cancel_btn)?;
        self.append(group, &[save, cancel])?;

        item.handles.save = Some(save);
        item.handles.cancel = Some(cancel);
        Ok(group)
    }

    fn selection(&mut self, selected: &mut [&mut Item]) -> Result<NodeId, SurfaceError> {
        let classes = &self.options.class_names;
        let section = self.node(Tag::Div, &classes.selection_section)?;
        self.surface.set_attribute(section, "data-section", "selection")?;
        let title = self.text_node(Tag::Span, "", &self.options.labels.selection_title)?;
        let list = self.node(Tag::Ul, &classes.list)?;
        for item in selected.iter_mut() {
            let entry = self.text_node(Tag::Li, &classes.item, &item.content)?;
            self.append(list, &[entry])?;
            item.handles.selection = Some(entry);
        }
        self.append(section, &[title, list])?;
        Ok(section)
    }
}
