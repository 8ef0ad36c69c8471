//! Property listing wizard: field registry, completion state, schema gating
//! and the dialog forms that feed them.

mod controller;
pub mod domain;
pub mod forms;
pub mod gallery;
mod presenter;
mod registry;
mod router;
pub mod selectors;
mod store;

pub use controller::{evaluate_advance, is_complete, Advance, MissingFields, WizardController};
pub use domain::{
    AgreementPolicy, ConfigurationError, DisplayColumn, FieldKey, FieldNote, FormIssue, FormKind,
    WizardError,
};
pub use forms::{FormPayload, FormRules};
pub use presenter::{ItemAction, ItemCard};
pub use registry::{FieldDefinition, FieldRegistry};
pub use router::{evaluate, wizard_router, EvaluateRequest, EvaluateView, FieldsView, SchemaView};
pub use selectors::{
    schema_for, select_schema, FlowError, OnboardingFlow, OnboardingStage, PropertyType,
    RoleFormSubmission, RoleType, SchemaDescriptor, SchemaSection,
};
pub use store::{FieldEntry, FieldState, WizardState};

#[cfg(test)]
mod tests;
