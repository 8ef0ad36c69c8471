use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::controller::WizardController;
use super::domain::{FieldKey, FormIssue, WizardError};
use super::forms::FormPayload;
use super::presenter::ItemCard;
use super::registry::{FieldDefinition, FieldRegistry};
use super::selectors::{schema_for, RoleFormSubmission, SchemaSection};

/// Stateless wizard endpoints: every request carries its complete input.
pub fn wizard_router(registry: Arc<FieldRegistry>) -> Router {
    Router::new()
        .route("/api/v1/wizard/fields", get(fields_handler))
        .route("/api/v1/wizard/schema", post(schema_handler))
        .route("/api/v1/wizard/evaluate", post(evaluate_handler))
        .with_state(registry)
}

#[derive(Debug, Serialize)]
pub struct FieldsView {
    pub fields: Vec<FieldDefinition>,
    pub required: Vec<FieldKey>,
}

#[derive(Debug, Serialize)]
pub struct SchemaView {
    pub sections: Vec<SchemaSection>,
    pub required_fields: Vec<&'static str>,
    pub issues: Vec<FormIssue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub submissions: Vec<FormPayload>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateView {
    pub advance: bool,
    pub missing: Vec<FieldKey>,
    pub cards: Vec<ItemCard>,
}

pub(crate) async fn fields_handler(State(registry): State<Arc<FieldRegistry>>) -> Response {
    let view = FieldsView {
        fields: registry.list().to_vec(),
        required: registry.required_keys(),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn schema_handler(axum::Json(submission): axum::Json<RoleFormSubmission>) -> Response {
    let schema = schema_for(submission.property_type, submission.role_type);
    let view = SchemaView {
        sections: schema.sections().to_vec(),
        required_fields: schema.required_fields(),
        issues: schema.validate(&submission),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn evaluate_handler(
    State(registry): State<Arc<FieldRegistry>>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response {
    match evaluate(&registry, request.submissions) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => wizard_error_response(&error),
    }
}

/// Replays the submissions against a fresh controller and presses "Next".
pub fn evaluate(
    registry: &FieldRegistry,
    submissions: Vec<FormPayload>,
) -> Result<EvaluateView, WizardError> {
    let mut controller = WizardController::new(registry.clone())?;
    for payload in submissions {
        controller.submit(payload.field_key(), payload)?;
    }

    let outcome = controller.next();
    let missing = match &outcome {
        Ok(_) => Vec::new(),
        Err(missing) => missing.keys.clone(),
    };

    Ok(EvaluateView {
        advance: outcome.is_ok(),
        missing,
        cards: controller.cards(),
    })
}

pub(crate) fn wizard_error_response(error: &WizardError) -> Response {
    let payload = match error {
        WizardError::InvalidPayload { key, issues } => json!({
            "error": error.to_string(),
            "field": key,
            "issues": issues,
        }),
        _ => json!({
            "error": error.to_string(),
        }),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
