use super::domain::{FieldKey, WizardError};
use super::forms::{FormPayload, FormRules, GalleryPayload};
use super::presenter::ItemCard;
use super::registry::FieldRegistry;
use super::store::{FieldState, WizardState};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Every required field is complete; the caller may navigate onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advance;

/// Required fields that blocked advancing. A normal outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFields {
    /// Registry order, matching the order the cards are shown in.
    pub keys: Vec<FieldKey>,
}

impl MissingFields {
    pub fn contains(&self, key: FieldKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.keys.iter().map(|key| key.as_str()).collect();
        write!(f, "missing required fields: {}", keys.join(", "))
    }
}

/// Gallery needs a cover; every other field only needs a submission.
pub fn is_complete(key: FieldKey, state: &FieldState) -> bool {
    if key.is_gallery() {
        state
            .data
            .as_ref()
            .and_then(FormPayload::as_gallery)
            .map(GalleryPayload::has_cover)
            .unwrap_or(false)
    } else {
        state.added
    }
}

/// Pure check behind the "Next" button.
pub fn evaluate_advance(state: &WizardState) -> Result<Advance, MissingFields> {
    let keys: Vec<FieldKey> = state
        .fields()
        .iter()
        .filter(|entry| entry.state.required && !is_complete(entry.key, &entry.state))
        .map(|entry| entry.key)
        .collect();

    if keys.is_empty() {
        Ok(Advance)
    } else {
        Err(MissingFields { keys })
    }
}

/// Owns the wizard state and is the only place it is updated.
#[derive(Debug, Clone)]
pub struct WizardController {
    registry: FieldRegistry,
    state: WizardState,
}

impl WizardController {
    pub fn new(registry: FieldRegistry) -> Result<Self, WizardError> {
        let state = WizardState::initialize(&registry)?;
        Ok(Self { registry, state })
    }

    /// Applies a dialog submission once the form's own rules pass.
    pub fn submit(&mut self, key: FieldKey, payload: FormPayload) -> Result<&FieldState, WizardError> {
        self.state.get(key)?;

        let issues = payload.issues();
        if !issues.is_empty() {
            warn!(field = %key, issues = issues.len(), "wizard submission rejected");
            return Err(WizardError::InvalidPayload { key, issues });
        }

        self.state = self.state.clone().mark_added(key, payload)?;
        self.state.get(key)
    }

    /// Recomputes the missing keys and reports whether navigation may proceed.
    pub fn next(&mut self) -> Result<Advance, MissingFields> {
        let outcome = evaluate_advance(&self.state);
        let missing = match &outcome {
            Ok(_) => {
                info!(fields = self.state.fields().len(), "wizard ready to advance");
                Vec::new()
            }
            Err(missing) => {
                warn!(missing = %missing, "wizard blocked on required fields");
                missing.keys.clone()
            }
        };
        self.state = self.state.clone().with_missing(missing);
        outcome
    }

    pub fn card(&self, key: FieldKey) -> Result<ItemCard, WizardError> {
        let state = self.state.get(key)?;
        let definition = self
            .registry
            .definition(key)
            .ok_or(WizardError::UnknownKey(key))?;
        Ok(ItemCard::present(definition, state, self.state.is_flagged(key)))
    }

    /// Cards in registry order.
    pub fn cards(&self) -> Vec<ItemCard> {
        self.registry
            .list()
            .iter()
            .zip(self.state.fields())
            .map(|(definition, entry)| {
                ItemCard::present(definition, &entry.state, self.state.is_flagged(entry.key))
            })
            .collect()
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn into_state(self) -> WizardState {
        self.state
    }
}
