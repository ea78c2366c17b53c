//! Presentation tags, input descriptions and labels for the list editor.
//!
//! Every group has built-in defaults. Hosts supply an [`OptionsOverride`] to
//! replace individual keys; anything left `None` keeps its default.
//!
//! ```rust
//! use bubbletea_list_editor::list_editor::{ClassNamesOverride, Options, OptionsOverride};
//!
//! let options = Options::merged(OptionsOverride {
//!     class_names: ClassNamesOverride {
//!         list: Some("todo".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//!
//! assert_eq!(options.class_names.list, "todo");
//! assert_eq!(options.class_names.delete_btn, "btn btn-danger");
//! ```

use once_cell::sync::Lazy;

const LIST_CLASS_NAME: &str = "list-group";

/// Defaults shared by every editor that doesn't override them.
pub static DEFAULT_OPTIONS: Lazy<Options> = Lazy::new(|| Options {
    class_names: ClassNames {
        list: LIST_CLASS_NAME.to_string(),

        wrapper: "container".to_string(),
        top_section: "row".to_string(),
        inputs_section: "col-8".to_string(),
        main_section: "row".to_string(),
        list_section: "col-8".to_string(),
        selection_section: "col-4".to_string(),

        item: format!("{LIST_CLASS_NAME}-item row"),
        item_wrapper: "row".to_string(),
        item_checkbox: "checkbox".to_string(),
        item_content: "content".to_string(),
        item_content_container: "text-left col".to_string(),

        buttons_container: "btn-group col-auto".to_string(),
        delete_btn: "btn btn-danger".to_string(),
        edit_btn: "btn btn-warning".to_string(),

        editing_buttons_container: "btn-group col-auto".to_string(),
        save_btn: "btn btn-success".to_string(),
        cancel_btn: "btn btn-secondary".to_string(),

        input_wrapper: "row margin30px".to_string(),
        input_container: "col".to_string(),
        input: "form-control".to_string(),
        submit_button_container: "col col-auto".to_string(),
        submit_button: "btn btn-primary".to_string(),
    },
    inputs: Inputs {
        add_item: InputOptions {
            input_name: "addItem".to_string(),
            name: "item-content".to_string(),
            placeholder: "Add item".to_string(),
            button_content: "Add".to_string(),
        },
        filter_items: InputOptions {
            input_name: "filterItems".to_string(),
            name: "item-content".to_string(),
            placeholder: "Filter items".to_string(),
            button_content: "Filter".to_string(),
        },
    },
    labels: Labels {
        delete_btn: "delete".to_string(),
        edit_btn: "edit".to_string(),
        save_btn: "save".to_string(),
        cancel_btn: "cancel".to_string(),
        selection_title: "Selected".to_string(),
        buttons_aria_label: "delete and edit buttons".to_string(),
        editing_buttons_aria_label: "save and cancel buttons".to_string(),
    },
});

/// Class strings for every structural node. Purely cosmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ClassNames {
    pub list: String,

    pub wrapper: String,
    pub top_section: String,
    pub inputs_section: String,
    pub main_section: String,
    pub list_section: String,
    pub selection_section: String,

    pub item: String,
    pub item_wrapper: String,
    pub item_checkbox: String,
    pub item_content: String,
    pub item_content_container: String,

    pub buttons_container: String,
    pub delete_btn: String,
    pub edit_btn: String,

    pub editing_buttons_container: String,
    pub save_btn: String,
    pub cancel_btn: String,

    pub input_wrapper: String,
    pub input_container: String,
    pub input: String,
    pub submit_button_container: String,
    pub submit_button: String,
}

/// Describes one of the two top inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// Logical name, used as the `data-input` attribute.
    pub input_name: String,
    /// Field `name` attribute.
    pub name: String,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Submit button text.
    pub button_content: String,
}

/// The add and filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Input that appends new items.
    pub add_item: InputOptions,
    /// Input that narrows the rendered items.
    pub filter_items: InputOptions,
}

/// Button and section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Delete button text.
    pub delete_btn: String,
    /// Edit button text.
    pub edit_btn: String,
    /// Save button text.
    pub save_btn: String,
    /// Cancel button text.
    pub cancel_btn: String,
    /// Heading of the selection section.
    pub selection_title: String,
    /// `aria-label` of the viewing-mode control group.
    pub buttons_aria_label: String,
    /// `aria-label` of the editing-mode control group.
    pub editing_buttons_aria_label: String,
}

/// Full editor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Presentation tags.
    pub class_names: ClassNames,
    /// Top input descriptions.
    pub inputs: Inputs,
    /// Button and section text.
    pub labels: Labels,
}

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS.clone()
    }
}

impl Options {
    /// Defaults with `overrides` applied key by key.
    pub fn merged(overrides: OptionsOverride) -> Self {
        let mut options = Self::default();
        options.apply(overrides);
        options
    }

    /// Applies `overrides` in place. Unset keys are left alone.
    pub fn apply(&mut self, overrides: OptionsOverride) {
        overrides.class_names.apply_to(&mut self.class_names);
        overrides.inputs.add_item.apply_to(&mut self.inputs.add_item);
        overrides
            .inputs
            .filter_items
            .apply_to(&mut self.inputs.filter_items);
        overrides.labels.apply_to(&mut self.labels);
    }
}

macro_rules! override_group {
    ($(#[$meta:meta])* $name:ident for $target:ident { $($field:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        #[allow(missing_docs)]
        pub struct $name {
            $(pub $field: Option<String>,)*
        }

        impl $name {
            fn apply_to(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }
        }
    };
}

override_group!(
    /// Per-key overrides for [`ClassNames`].
    ClassNamesOverride for ClassNames {
        list,
        wrapper,
        top_section,
        inputs_section,
        main_section,
        list_section,
        selection_section,
        item,
        item_wrapper,
        item_checkbox,
        item_content,
        item_content_container,
        buttons_container,
        delete_btn,
        edit_btn,
        editing_buttons_container,
        save_btn,
        cancel_btn,
        input_wrapper,
        input_container,
        input,
        submit_button_container,
        submit_button,
    }
);

override_group!(
    /// Per-key overrides for [`InputOptions`].
    InputOptionsOverride for InputOptions {
        input_name,
        name,
        placeholder,
        button_content,
    }
);

override_group!(
    /// Per-key overrides for [`Labels`].
    LabelsOverride for Labels {
        delete_btn,
        edit_btn,
        save_btn,
        cancel_btn,
        selection_title,
        buttons_aria_label,
        editing_buttons_aria_label,
    }
);

/// Overrides for both top inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputsOverride {
    /// Add-item input overrides.
    pub add_item: InputOptionsOverride,
    /// Filter input overrides.
    pub filter_items: InputOptionsOverride,
}

/// Partial configuration merged over [`DEFAULT_OPTIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsOverride {
    /// Class overrides.
    pub class_names: ClassNamesOverride,
    /// Input overrides.
    pub inputs: InputsOverride,
    /// Label overrides.
    pub labels: LabelsOverride,
}
