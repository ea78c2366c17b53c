//! Tests for the list editor component.

use super::*;
use crate::surface::{self, NodeId, Surface, Tag, Tree};
use crate::Component;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn editor(items: &[&str]) -> ListEditor {
    ListEditor::with_tree(items.iter().copied())
}

fn contents(editor: &ListEditor) -> Vec<&str> {
    editor.items().iter().map(|i| i.content()).collect()
}

fn id_of(editor: &ListEditor, content: &str) -> ItemId {
    editor
        .items()
        .iter()
        .find(|i| i.content() == content)
        .map(|i| i.id())
        .unwrap()
}

fn handles(editor: &ListEditor, content: &str) -> ItemHandles {
    *editor.item(id_of(editor, content)).unwrap().handles()
}

fn key(editor: &mut ListEditor, code: KeyCode) {
    editor.update(Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }));
}

fn type_text(editor: &mut ListEditor, text: &str) {
    for c in text.chars() {
        key(editor, KeyCode::Char(c));
    }
}

fn rendered_contents(editor: &ListEditor) -> Vec<String> {
    editor
        .visible_ids()
        .iter()
        .map(|id| {
            let row = editor.item(*id).unwrap().handles().node.unwrap();
            surface::descendants(editor.surface(), row)
                .into_iter()
                .filter(|n| editor.surface().tag(*n) == Some(Tag::Span))
                .filter_map(|n| editor.surface().text(n))
                .collect::<String>()
        })
        .collect()
}

fn selection_view(editor: &ListEditor) -> Vec<String> {
    let tree = editor.surface();
    let section = surface::descendants(tree, editor.mount())
        .into_iter()
        .find(|n| tree.attribute(*n, "data-section") == Some("selection"))
        .unwrap();
    surface::descendants(tree, section)
        .into_iter()
        .filter(|n| tree.tag(*n) == Some(Tag::Li))
        .filter_map(|n| tree.text(n).map(str::to_string))
        .collect()
}

fn plain(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s.as_bytes())).unwrap()
}

#[test]
fn test_new_assigns_ids_in_input_order() {
    let editor = editor(&["milk", "bread", "eggs"]);

    let ids: Vec<u64> = editor.items().iter().map(|i| i.id().get()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(contents(&editor), ["milk", "bread", "eggs"]);
    assert!(editor.items().iter().all(|i| !i.checked() && !i.editing()));
    assert_eq!(editor.render_cycle(), 1);
    assert_eq!(editor.visible_ids().len(), 3);
}

#[test]
fn test_new_rejects_stale_mount() {
    let mut tree = Tree::new();
    let mount = tree.create_node(Tag::Div);
    tree.remove(mount).unwrap();

    let result = ListEditor::new(["milk"], tree, mount, Options::default());
    assert!(matches!(result, Err(Error::InvalidMount(m)) if m == mount));
}

#[test]
fn test_add_item_trims_and_appends() {
    let mut editor = editor(&["milk"]);

    assert_eq!(editor.add_item(""), None);
    assert_eq!(editor.add_item("   "), None);
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.render_cycle(), 1);

    let id = editor.add_item(" hi ").unwrap();
    assert_eq!(editor.item(id).unwrap().content(), "hi");
    assert_eq!(contents(&editor), ["milk", "hi"]);
    assert_eq!(editor.render_cycle(), 2);
}

#[test]
fn test_ids_are_never_reused() {
    let mut editor = editor(&["a", "b"]);
    let b = id_of(&editor, "b");

    assert!(editor.delete_item(b));
    let c = editor.add_item("c").unwrap();
    assert!(c > b);

    let mut seen: Vec<ItemId> = editor.items().iter().map(|i| i.id()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), editor.len());
}

#[test]
fn test_ids_are_scoped_per_editor() {
    let first = editor(&["a"]);
    let second = editor(&["b"]);
    assert_eq!(first.items()[0].id(), second.items()[0].id());
}

#[test]
fn test_ids_stable_across_renders_and_filters() {
    let mut editor = editor(&["milk", "bread"]);
    let before: Vec<ItemId> = editor.items().iter().map(|i| i.id()).collect();

    editor.filter("mi");
    editor.toggle_checked(before[1]);
    editor.filter("");

    let after: Vec<ItemId> = editor.items().iter().map(|i| i.id()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_delete_removes_only_that_item() {
    let mut editor = editor(&["milk", "bread", "eggs"]);
    let bread = id_of(&editor, "bread");
    let row = handles(&editor, "bread").node.unwrap();
    let cycle = editor.render_cycle();

    assert!(editor.delete_item(bread));

    assert_eq!(contents(&editor), ["milk", "eggs"]);
    assert!(!editor.surface().contains(row));
    assert_eq!(editor.render_cycle(), cycle, "delete must not re-render");
    assert!(!editor.visible_ids().contains(&bread));
}

#[test]
fn test_delete_checked_item_clears_its_selection_entry() {
    let mut editor = editor(&["Éclair", "bread"]);
    let milk = editor.add_item("milk").unwrap();
    editor.toggle_checked(milk);
    editor.filter("");
    let entry = handles(&editor, "milk").selection.unwrap();
    assert_eq!(selection_view(&editor), ["milk"]);

    assert!(editor.delete_item(milk));

    assert!(!editor.surface().contains(entry));
    assert!(selection_view(&editor).is_empty());
    assert!(editor.selection().is_empty());
}

#[test]
fn test_selection_section_follows_filtered_view() {
    let mut editor = editor(&["milk", "bread"]);
    let milk = id_of(&editor, "milk");
    editor.toggle_checked(milk);

    editor.filter("bread");
    assert!(selection_view(&editor).is_empty());
    assert_eq!(editor.item(milk).unwrap().handles().selection, None);
    assert_eq!(editor.selection(), ["milk"]);

    editor.filter("");
    assert_eq!(selection_view(&editor), ["milk"]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut editor = editor(&["milk"]);
    let milk = id_of(&editor, "milk");
    editor.delete_item(milk);

    assert!(!editor.delete_item(milk));
    assert!(editor.is_empty());
}

#[test]
fn test_filter_is_case_insensitive_and_pure() {
    let mut editor = editor(&["Milk", "bread", "BREAD crumbs"]);
    let before = editor.items().to_vec();

    assert_eq!(editor.filter("Bre"), 2);
    assert_eq!(rendered_contents(&editor), ["bread", "BREAD crumbs"]);

    let after: Vec<_> = editor
        .items()
        .iter()
        .map(|i| (i.id(), i.content().to_string(), i.checked(), i.editing()))
        .collect();
    let expected: Vec<_> = before
        .iter()
        .map(|i| (i.id(), i.content().to_string(), i.checked(), i.editing()))
        .collect();
    assert_eq!(after, expected);

    assert_eq!(editor.filter(""), 3);
    assert_eq!(rendered_contents(&editor), ["Milk", "bread", "BREAD crumbs"]);
}

#[test]
fn test_filtered_out_items_have_no_handles() {
    let mut editor = editor(&["milk", "bread"]);
    editor.filter("bread");

    assert_eq!(*editor.item(id_of(&editor, "milk")).unwrap().handles(), ItemHandles::default());
    assert!(handles(&editor, "bread").node.is_some());
}

#[test]
fn test_edit_save_round_trip() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");

    assert!(editor.toggle_edit(id));
    let h = *editor.item(id).unwrap().handles();
    assert!(h.input.is_some() && h.save.is_some() && h.cancel.is_some());
    assert!(h.edit.is_none() && h.delete.is_none());
    assert_eq!(editor.surface().value(h.input.unwrap()), Some("milk"));

    assert!(!editor.save_edit(id, "   "));
    assert!(editor.item(id).unwrap().editing());

    assert!(editor.save_edit(id, " oat milk "));
    let item = editor.item(id).unwrap();
    assert_eq!(item.content(), "oat milk");
    assert!(!item.editing());
}

#[test]
fn test_edit_cancel_keeps_content() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");

    editor.toggle_edit(id);
    let input = editor.item(id).unwrap().handles().input.unwrap();
    editor.dispatch(Event::Input {
        target: input,
        value: "changed".into(),
    });
    assert!(editor.cancel_edit(id));

    let item = editor.item(id).unwrap();
    assert_eq!(item.content(), "milk");
    assert!(!item.editing());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut editor = editor(&["milk"]);
    let gone = id_of(&editor, "milk");
    editor.delete_item(gone);
    let cycle = editor.render_cycle();

    assert!(!editor.toggle_edit(gone));
    assert!(!editor.save_edit(gone, "x"));
    assert!(!editor.cancel_edit(gone));
    assert!(!editor.toggle_checked(gone));
    assert_eq!(editor.render_cycle(), cycle);
}

#[test]
fn test_selection_projection_follows_checked_items() {
    let mut editor = editor(&["milk", "bread", "eggs"]);
    let milk = id_of(&editor, "milk");
    let eggs = id_of(&editor, "eggs");
    let bread = id_of(&editor, "bread");

    editor.toggle_checked(eggs);
    editor.toggle_checked(milk);
    editor.toggle_checked(bread);
    editor.toggle_checked(bread);

    assert_eq!(editor.selection(), ["milk", "eggs"]);
    assert_eq!(selection_view(&editor), ["milk", "eggs"]);

    let checkbox = handles(&editor, "milk").checkbox.unwrap();
    assert!(editor.surface().attribute(checkbox, "checked").is_some());
    let checkbox = handles(&editor, "bread").checkbox.unwrap();
    assert!(editor.surface().attribute(checkbox, "checked").is_none());
}

#[test]
fn test_end_to_end_groceries() {
    let mut editor = editor(&["milk", "bread"]);
    editor.add_item("eggs");
    assert_eq!(contents(&editor), ["milk", "bread", "eggs"]);
    let mut ids: Vec<_> = editor.items().iter().map(|i| i.id()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    editor.filter("re");
    assert_eq!(rendered_contents(&editor), ["bread"]);
    assert_eq!(editor.len(), 3);

    let bread = id_of(&editor, "bread");
    editor.delete_item(bread);
    assert_eq!(contents(&editor), ["milk", "eggs"]);
    assert_eq!(editor.len(), 2);
}

#[test]
fn test_non_filter_actions_render_canonical_list() {
    let mut editor = editor(&["milk", "bread"]);
    editor.filter("milk");
    assert_eq!(editor.visible_ids().len(), 1);

    editor.toggle_checked(id_of(&editor, "milk"));
    assert_eq!(editor.visible_ids().len(), 2);
}

#[test]
fn test_typed_text_survives_rerender() {
    let mut editor = editor(&["milk", "bread"]);
    let add = editor.input_handles(InputRole::AddItem).unwrap();
    let filter = editor.input_handles(InputRole::FilterItems).unwrap();
    editor.dispatch(Event::Input {
        target: add.input,
        value: "half-typed".into(),
    });
    editor.dispatch(Event::Input {
        target: filter.input,
        value: "br".into(),
    });

    editor.toggle_checked(id_of(&editor, "milk"));

    let new_add = editor.input_handles(InputRole::AddItem).unwrap();
    assert_ne!(new_add.input, add.input);
    assert!(!editor.surface().contains(add.input));
    assert_eq!(editor.input_value(InputRole::AddItem), "half-typed");
    assert_eq!(editor.input_value(InputRole::FilterItems), "br");
}

#[test]
fn test_old_handles_are_stale_after_render() {
    let mut editor = editor(&["milk"]);
    let old = handles(&editor, "milk");

    editor.toggle_checked(id_of(&editor, "milk"));

    assert!(!editor.surface().contains(old.node.unwrap()));
    assert!(!editor.dispatch(Event::Click(old.delete.unwrap())));
    assert_eq!(editor.len(), 1);
}

#[test]
fn test_mount_keeps_single_subtree() {
    let mut editor = editor(&["milk"]);
    for _ in 0..3 {
        editor.toggle_checked(id_of(&editor, "milk"));
    }
    assert_eq!(editor.surface().children(editor.mount()).len(), 1);

    let live = surface::descendants(editor.surface(), editor.mount()).len();
    assert_eq!(editor.surface().len(), live);
}

#[test]
fn test_click_add_button_uses_field_value() {
    let mut editor = editor(&[]);
    let add = editor.input_handles(InputRole::AddItem).unwrap();

    assert!(editor.dispatch(Event::Click(add.button)));
    assert!(editor.is_empty());

    editor.dispatch(Event::Input {
        target: add.input,
        value: "  tea ".into(),
    });
    editor.dispatch(Event::Click(add.button));
    assert_eq!(contents(&editor), ["tea"]);
    assert_eq!(editor.input_value(InputRole::AddItem), "");
}

#[test]
fn test_click_filter_button_uses_field_value() {
    let mut editor = editor(&["milk", "bread"]);
    let filter = editor.input_handles(InputRole::FilterItems).unwrap();
    editor.dispatch(Event::Input {
        target: filter.input,
        value: "MIL".into(),
    });
    editor.dispatch(Event::Click(filter.button));

    assert_eq!(rendered_contents(&editor), ["milk"]);
    assert_eq!(editor.input_value(InputRole::FilterItems), "MIL");
}

#[test]
fn test_row_click_toggles_but_not_on_buttons_or_while_editing() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");

    let content = surface::descendants(editor.surface(), handles(&editor, "milk").node.unwrap())
        .into_iter()
        .find(|n| editor.surface().tag(*n) == Some(Tag::Span))
        .unwrap();
    assert!(editor.dispatch(Event::Click(content)));
    assert!(editor.item(id).unwrap().checked());

    let checkbox = handles(&editor, "milk").checkbox.unwrap();
    editor.dispatch(Event::Click(checkbox));
    assert!(!editor.item(id).unwrap().checked());

    editor.toggle_edit(id);
    let row = handles(&editor, "milk").node.unwrap();
    assert!(!editor.dispatch(Event::Click(row)));
    assert!(!editor.item(id).unwrap().checked());
}

#[test]
fn test_button_clicks_drive_edit_flow() {
    let mut editor = editor(&["milk", "bread"]);
    let id = id_of(&editor, "bread");

    editor.dispatch(Event::Click(handles(&editor, "bread").edit.unwrap()));
    assert!(editor.item(id).unwrap().editing());
    assert!(!editor.item(id).unwrap().checked());

    let input = handles(&editor, "bread").input.unwrap();
    editor.dispatch(Event::Input {
        target: input,
        value: "rye bread".into(),
    });
    editor.dispatch(Event::Click(handles(&editor, "bread").save.unwrap()));

    let item = editor.item(id).unwrap();
    assert_eq!(item.content(), "rye bread");
    assert!(!item.editing());
    assert!(!item.checked());
}

#[test]
fn test_delete_button_drops_row_listeners() {
    let mut editor = editor(&["milk", "bread"]);
    let h = handles(&editor, "milk");

    assert!(editor.dispatch(Event::Click(h.delete.unwrap())));
    assert_eq!(contents(&editor), ["bread"]);
    assert!(!editor.dispatch(Event::Click(h.node.unwrap())));
}

#[test]
fn test_input_events_only_reach_text_fields() {
    let mut editor = editor(&["milk"]);
    let h = handles(&editor, "milk");

    assert!(!editor.dispatch(Event::Input {
        target: h.checkbox.unwrap(),
        value: "x".into(),
    }));
    assert!(!editor.dispatch(Event::Input {
        target: h.delete.unwrap(),
        value: "x".into(),
    }));
}

#[test]
fn test_renders_configured_labels_and_classes() {
    let mut tree = Tree::new();
    let mount = tree.create_node(Tag::Div);
    let options = Options::merged(OptionsOverride {
        class_names: ClassNamesOverride {
            delete_btn: Some("danger".into()),
            ..Default::default()
        },
        labels: LabelsOverride {
            delete_btn: Some("remove".into()),
            ..Default::default()
        },
        ..Default::default()
    });
    let editor = ListEditor::new(["milk"], tree, mount, options).unwrap();

    let delete = editor.items()[0].handles().delete.unwrap();
    assert_eq!(editor.surface().text(delete), Some("remove"));
    assert_eq!(editor.surface().class(delete), Some("danger"));

    let group = editor.surface().parent(delete).unwrap();
    assert_eq!(editor.surface().attribute(group, "role"), Some("group"));
    assert_eq!(
        editor.surface().attribute(group, "aria-label"),
        Some("delete and edit buttons")
    );

    let add = editor.input_handles(InputRole::AddItem).unwrap();
    assert_eq!(editor.surface().attribute(add.input, "placeholder"), Some("Add item"));
    assert_eq!(editor.surface().text(add.button), Some("Add"));
}

#[test]
fn test_keyboard_add_item() {
    let mut editor = editor(&["milk"]);
    key(&mut editor, KeyCode::Char('x'));
    assert_eq!(editor.input_value(InputRole::AddItem), "", "ignored while blurred");

    editor.focus();
    type_text(&mut editor, "eggz");
    key(&mut editor, KeyCode::Backspace);
    type_text(&mut editor, "s");
    assert_eq!(editor.input_value(InputRole::AddItem), "eggs");

    key(&mut editor, KeyCode::Enter);
    assert_eq!(contents(&editor), ["milk", "eggs"]);
    assert_eq!(editor.focus_key(), Some(FocusKey::Input(InputRole::AddItem)));
}

#[test]
fn test_keyboard_focus_walks_document_order() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");
    editor.focus();

    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(editor.focus_key().unwrap());
        key(&mut editor, KeyCode::Tab);
    }
    assert_eq!(
        seen,
        vec![
            FocusKey::Input(InputRole::AddItem),
            FocusKey::Submit(InputRole::AddItem),
            FocusKey::Input(InputRole::FilterItems),
            FocusKey::Submit(InputRole::FilterItems),
            FocusKey::Row(id),
            FocusKey::Edit(id),
            FocusKey::Delete(id),
        ]
    );
    assert_eq!(editor.focus_key(), Some(FocusKey::Input(InputRole::AddItem)));

    key(&mut editor, KeyCode::BackTab);
    assert_eq!(editor.focus_key(), Some(FocusKey::Delete(id)));
}

#[test]
fn test_keyboard_focus_survives_rerender() {
    let mut editor = editor(&["milk", "bread"]);
    let bread = id_of(&editor, "bread");
    editor.focus();
    assert!(editor.set_focus_key(FocusKey::Row(bread)));
    let before = editor.focused_node().unwrap();

    key(&mut editor, KeyCode::Char(' '));

    assert!(editor.item(bread).unwrap().checked());
    assert_eq!(editor.focus_key(), Some(FocusKey::Row(bread)));
    assert_ne!(editor.focused_node(), Some(before));
}

#[test]
fn test_keyboard_edit_flow() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");
    editor.focus();
    editor.set_focus_key(FocusKey::Edit(id));

    key(&mut editor, KeyCode::Enter);
    assert!(editor.item(id).unwrap().editing());
    assert_eq!(editor.focus_key(), Some(FocusKey::EditInput(id)));

    type_text(&mut editor, " 2%");
    key(&mut editor, KeyCode::Enter);
    assert_eq!(editor.item(id).unwrap().content(), "milk 2%");
    assert_eq!(editor.focus_key(), Some(FocusKey::Row(id)));

    editor.set_focus_key(FocusKey::Edit(id));
    key(&mut editor, KeyCode::Enter);
    type_text(&mut editor, "!!");
    key(&mut editor, KeyCode::Esc);
    assert_eq!(editor.item(id).unwrap().content(), "milk 2%");
    assert!(!editor.item(id).unwrap().editing());
}

#[test]
fn test_keyboard_delete_moves_focus_to_add_field() {
    let mut editor = editor(&["milk"]);
    let id = id_of(&editor, "milk");
    editor.focus();
    editor.set_focus_key(FocusKey::Delete(id));

    key(&mut editor, KeyCode::Enter);

    assert!(editor.is_empty());
    assert_eq!(editor.focus_key(), Some(FocusKey::Input(InputRole::AddItem)));
}

#[test]
fn test_view_lists_inputs_rows_and_selection() {
    let mut editor = editor(&["milk", "bread"]);
    editor.toggle_checked(id_of(&editor, "bread"));

    let view = plain(&editor.view());
    let lines: Vec<&str> = view.lines().map(str::trim_end).collect();

    assert!(lines[0].contains("[Add item]") && lines[0].contains("<Add>"));
    assert!(lines[1].contains("[Filter items]") && lines[1].contains("<Filter>"));
    assert!(lines[2].contains("[ ] milk") && lines[2].contains("<edit>"));
    assert!(lines[3].contains("[x] bread") && lines[3].contains("<delete>"));
    assert!(lines[4].contains("Selected"));
    assert!(lines[5].contains("bread"));
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_view_marks_focused_line() {
    let mut editor = editor(&["milk"]);
    editor.focus();
    type_text(&mut editor, "tea");

    let view = plain(&editor.view());
    let first = view.lines().next().unwrap();
    assert!(first.starts_with(style::FOCUS_MARKER));
    assert!(first.contains("[tea_]"));
}

#[test]
fn test_stale_node_id_not_found_after_slot_reuse() {
    let mut editor = editor(&["milk"]);
    let old: NodeId = handles(&editor, "milk").edit.unwrap();
    editor.toggle_checked(id_of(&editor, "milk"));
    editor.toggle_checked(id_of(&editor, "milk"));

    assert!(!editor.surface().contains(old));
    assert!(!editor.dispatch(Event::Click(old)));
    assert!(!editor.item(id_of(&editor, "milk")).unwrap().editing());
}
