use super::domain::{ConfigurationError, FieldKey, WizardError};
use super::forms::FormPayload;
use super::registry::FieldRegistry;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, error};

/// Completion state for a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    pub added: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FormPayload>,
}

impl FieldState {
    const fn pending(required: bool) -> Self {
        Self {
            added: false,
            required,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldEntry {
    pub key: FieldKey,
    pub state: FieldState,
}

/// Every registered field's state plus the last computed missing keys, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    fields: Vec<FieldEntry>,
    missing_required: Vec<FieldKey>,
}

impl WizardState {
    pub fn initialize(registry: &FieldRegistry) -> Result<Self, WizardError> {
        let definitions = registry.list();
        if definitions.is_empty() {
            return Err(ConfigurationError::EmptyRegistry.into());
        }

        let mut seen = BTreeSet::new();
        let mut fields = Vec::with_capacity(definitions.len());
        for definition in definitions {
            if !seen.insert(definition.key) {
                return Err(ConfigurationError::DuplicateKey(definition.key).into());
            }
            fields.push(FieldEntry {
                key: definition.key,
                state: FieldState::pending(definition.required),
            });
        }

        Ok(Self {
            fields,
            missing_required: Vec::new(),
        })
    }

    /// Records a successful submission. `required` is never touched.
    pub fn mark_added(mut self, key: FieldKey, payload: FormPayload) -> Result<Self, WizardError> {
        if payload.field_key() != key {
            return Err(WizardError::PayloadMismatch {
                key,
                form: payload.kind(),
            });
        }

        let entry = self.entry_mut(key)?;
        entry.state.added = true;
        entry.state.data = Some(payload);
        debug!(field = %key, "wizard field marked added");

        Ok(self)
    }

    pub fn get(&self, key: FieldKey) -> Result<&FieldState, WizardError> {
        self.fields
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.state)
            .ok_or_else(|| unknown_key(key))
    }

    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    pub fn missing_required(&self) -> &[FieldKey] {
        &self.missing_required
    }

    pub fn is_flagged(&self, key: FieldKey) -> bool {
        self.missing_required.contains(&key)
    }

    /// Replaces the missing keys wholesale with a fresh evaluation result.
    pub(crate) fn with_missing(mut self, missing: Vec<FieldKey>) -> Self {
        self.missing_required = missing;
        self
    }

    fn entry_mut(&mut self, key: FieldKey) -> Result<&mut FieldEntry, WizardError> {
        self.fields
            .iter_mut()
            .find(|entry| entry.key == key)
            .ok_or_else(|| unknown_key(key))
    }
}

fn unknown_key(key: FieldKey) -> WizardError {
    error!(field = %key, "wizard referenced a field outside its registry");
    WizardError::UnknownKey(key)
}
