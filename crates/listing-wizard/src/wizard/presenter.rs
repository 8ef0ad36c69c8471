use super::domain::{DisplayColumn, FieldKey, FormKind};
use super::forms::FormPayload;
use super::registry::FieldDefinition;
use super::store::FieldState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemAction {
    Add,
    Edit,
}

impl ItemAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Edit => "Edit",
        }
    }
}

/// Card plus dialog view for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCard {
    pub key: FieldKey,
    pub label: &'static str,
    pub note: &'static str,
    pub column: DisplayColumn,
    pub form: FormKind,
    pub added: bool,
    pub required: bool,
    /// Highlighted because the last "Next" found it incomplete.
    pub flagged: bool,
    pub action: ItemAction,
    pub dialog_title: String,
    pub dialog_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_data: Option<FormPayload>,
}

impl ItemCard {
    pub fn present(definition: &FieldDefinition, state: &FieldState, flagged: bool) -> Self {
        let action = if state.added {
            ItemAction::Edit
        } else {
            ItemAction::Add
        };
        let dialog_description = match action {
            ItemAction::Edit => "Update your information below.",
            ItemAction::Add => "Please fill out the form to add this item.",
        };

        Self {
            key: definition.key,
            label: definition.label,
            note: definition.note.label(),
            column: definition.column,
            form: definition.form,
            added: state.added,
            required: state.required,
            flagged,
            action,
            dialog_title: format!("{} {}", action.label(), definition.label),
            dialog_description,
            initial_data: if state.added { state.data.clone() } else { None },
        }
    }

    pub const fn action_label(&self) -> &'static str {
        self.action.label()
    }
}
