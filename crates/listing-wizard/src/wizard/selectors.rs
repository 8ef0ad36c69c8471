use super::domain::FormIssue;
use super::forms::MediaRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleHouse,
    Apartments,
    Condominiums,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 3] {
        [Self::SingleHouse, Self::Apartments, Self::Condominiums]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleHouse => "single-house",
            Self::Apartments => "apartments",
            Self::Condominiums => "condominiums",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleHouse => "Single House",
            Self::Apartments => "Apartments",
            Self::Condominiums => "Condominiums",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Only condominium listings ask who is listing the property.
    pub const fn shows_role_selector(self) -> bool {
        matches!(self, Self::Condominiums)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleType {
    Landlord,
    Realtor,
    PropertyManagement,
}

impl RoleType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Landlord, Self::Realtor, Self::PropertyManagement]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Realtor => "realtor",
            Self::PropertyManagement => "property-management",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Landlord => "Landlord",
            Self::Realtor => "Realtor",
            Self::PropertyManagement => "Property Management",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Building block of the onboarding form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaSection {
    Base,
    OwnershipProof,
    LandlordExtra,
    RealtorExtra,
}

impl SchemaSection {
    /// Every field the section can hold. See [`SchemaDescriptor::section_fields`]
    /// for the fields a given selection actually asks for.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Base => &["propertyType", "roleType"],
            Self::OwnershipProof => &["ownershipDoc", "acceptTerms"],
            Self::LandlordExtra => &["landlordLicenseNumber"],
            Self::RealtorExtra => &["realtorAgencyName"],
        }
    }
}

/// Onboarding form schema chosen for a (property, role) selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    sections: Vec<SchemaSection>,
    /// The role selector is on screen, so the base section requires a role.
    asks_role: bool,
}

impl SchemaDescriptor {
    /// Base schema before any property type is picked.
    pub fn base() -> Self {
        Self::merged(None, &[])
    }

    fn merged(property_type: Option<PropertyType>, extra: &[SchemaSection]) -> Self {
        let mut sections = vec![SchemaSection::Base];
        sections.extend_from_slice(extra);
        Self {
            sections,
            asks_role: property_type.map_or(false, PropertyType::shows_role_selector),
        }
    }

    pub const fn asks_role(&self) -> bool {
        self.asks_role
    }

    pub fn section_fields(&self, section: SchemaSection) -> &'static [&'static str] {
        match section {
            SchemaSection::Base if !self.asks_role => &["propertyType"],
            _ => section.fields(),
        }
    }

    pub fn sections(&self) -> &[SchemaSection] {
        &self.sections
    }

    pub fn includes(&self, section: SchemaSection) -> bool {
        self.sections.contains(&section)
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .flat_map(|section| self.section_fields(*section).iter().copied())
            .collect()
    }

    /// Every failed rule across the merged sections.
    pub fn validate(&self, submission: &RoleFormSubmission) -> Vec<FormIssue> {
        self.sections
            .iter()
            .flat_map(|section| section_issues(*section, self.asks_role, submission))
            .collect()
    }
}

/// Total over every selection; unmatched combinations fall back to the base schema.
pub fn select_schema(property_type: PropertyType, role_type: Option<RoleType>) -> SchemaDescriptor {
    use SchemaSection::{LandlordExtra, OwnershipProof, RealtorExtra};

    let extra: &[SchemaSection] = match (property_type, role_type) {
        (PropertyType::Condominiums, Some(RoleType::Landlord)) => &[OwnershipProof, LandlordExtra],
        (PropertyType::Condominiums, Some(RoleType::Realtor)) => &[OwnershipProof, RealtorExtra],
        (PropertyType::SingleHouse, _) => &[OwnershipProof],
        (PropertyType::Condominiums, Some(RoleType::PropertyManagement) | None)
        | (PropertyType::Apartments, _) => &[],
    };
    SchemaDescriptor::merged(Some(property_type), extra)
}

/// Schema for a possibly incomplete selection.
pub fn schema_for(property_type: Option<PropertyType>, role_type: Option<RoleType>) -> SchemaDescriptor {
    match property_type {
        Some(property_type) => select_schema(property_type, role_type),
        None => SchemaDescriptor::base(),
    }
}

/// Values captured by the property/role onboarding form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFormSubmission {
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    #[serde(default)]
    pub ownership_doc: Option<MediaRef>,
    #[serde(default)]
    pub accept_terms: bool,
    #[serde(default)]
    pub landlord_license_number: Option<String>,
    #[serde(default)]
    pub realtor_agency_name: Option<String>,
}

impl RoleFormSubmission {
    pub fn validate(&self) -> Vec<FormIssue> {
        schema_for(self.property_type, self.role_type).validate(self)
    }
}

fn section_issues(
    section: SchemaSection,
    asks_role: bool,
    submission: &RoleFormSubmission,
) -> Vec<FormIssue> {
    let mut issues = Vec::new();

    match section {
        SchemaSection::Base => {
            if submission.property_type.is_none() {
                issues.push(FormIssue::new(
                    "propertyType",
                    "Please select a property type.",
                ));
            }
            if asks_role && submission.role_type.is_none() {
                issues.push(FormIssue::new("roleType", "Please select a role."));
            }
        }
        SchemaSection::OwnershipProof => {
            match &submission.ownership_doc {
                None => issues.push(FormIssue::new(
                    "ownershipDoc",
                    "Please upload an ownership document",
                )),
                Some(doc) if !doc.is_pdf() => {
                    issues.push(FormIssue::new("ownershipDoc", "Only PDF files are allowed"))
                }
                Some(doc) if !doc.within_size_limit() => issues.push(FormIssue::new(
                    "ownershipDoc",
                    "File size must be less than 10MB",
                )),
                Some(_) => {}
            }
            if !submission.accept_terms {
                issues.push(FormIssue::new(
                    "acceptTerms",
                    "You must accept the terms and conditions",
                ));
            }
        }
        SchemaSection::LandlordExtra => {
            if is_missing(&submission.landlord_license_number) {
                issues.push(FormIssue::new(
                    "landlordLicenseNumber",
                    "License number is required",
                ));
            }
        }
        SchemaSection::RealtorExtra => {
            if is_missing(&submission.realtor_agency_name) {
                issues.push(FormIssue::new(
                    "realtorAgencyName",
                    "Agency name is required",
                ));
            }
        }
    }

    issues
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).map_or(true, str::is_empty)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    SelectingPropertyType,
    SelectingRole,
    FillingRoleForm,
    FillingConfirmationStep,
}

impl OnboardingStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelectingPropertyType => "Selecting property type",
            Self::SelectingRole => "Selecting role",
            Self::FillingRoleForm => "Filling role form",
            Self::FillingConfirmationStep => "Filling confirmation step",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("cannot {action} while {}", .stage.label())]
    OutOfOrder {
        stage: OnboardingStage,
        action: &'static str,
    },
    #[error("{0} listings do not ask for a role")]
    RoleNotApplicable(PropertyType),
    #[error("role form rejected ({} issue(s))", .0.len())]
    InvalidSubmission(Vec<FormIssue>),
}

/// Top-level onboarding gate ahead of the field wizard.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    stage: OnboardingStage,
    property_type: Option<PropertyType>,
    role_type: Option<RoleType>,
    submission: Option<RoleFormSubmission>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub const fn new() -> Self {
        Self {
            stage: OnboardingStage::SelectingPropertyType,
            property_type: None,
            role_type: None,
            submission: None,
        }
    }

    pub const fn stage(&self) -> OnboardingStage {
        self.stage
    }

    pub const fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub const fn role_type(&self) -> Option<RoleType> {
        self.role_type
    }

    pub fn submission(&self) -> Option<&RoleFormSubmission> {
        self.submission.as_ref()
    }

    /// Schema backing the role form for the current selection.
    pub fn schema(&self) -> SchemaDescriptor {
        schema_for(self.property_type, self.role_type)
    }

    /// Picking (or re-picking) a property type clears any earlier role choice.
    pub fn select_property_type(
        &mut self,
        property_type: PropertyType,
    ) -> Result<OnboardingStage, FlowError> {
        if self.stage == OnboardingStage::FillingConfirmationStep {
            return Err(FlowError::OutOfOrder {
                stage: self.stage,
                action: "select a property type",
            });
        }

        self.property_type = Some(property_type);
        self.role_type = None;
        self.stage = if property_type.shows_role_selector() {
            OnboardingStage::SelectingRole
        } else {
            OnboardingStage::FillingRoleForm
        };
        debug!(%property_type, stage = self.stage.label(), "property type selected");

        Ok(self.stage)
    }

    pub fn select_role(&mut self, role_type: RoleType) -> Result<OnboardingStage, FlowError> {
        match (self.stage, self.property_type) {
            (OnboardingStage::SelectingRole | OnboardingStage::FillingRoleForm, Some(property_type))
                if !property_type.shows_role_selector() =>
            {
                Err(FlowError::RoleNotApplicable(property_type))
            }
            (OnboardingStage::SelectingRole | OnboardingStage::FillingRoleForm, Some(_)) => {
                self.role_type = Some(role_type);
                self.stage = OnboardingStage::FillingRoleForm;
                debug!(%role_type, "role selected");
                Ok(self.stage)
            }
            (stage, _) => Err(FlowError::OutOfOrder {
                stage,
                action: "select a role",
            }),
        }
    }

    /// Validates the role form against the merged schema and moves to confirmation.
    pub fn submit_role_form(
        &mut self,
        mut submission: RoleFormSubmission,
    ) -> Result<OnboardingStage, FlowError> {
        if self.stage != OnboardingStage::FillingRoleForm {
            return Err(FlowError::OutOfOrder {
                stage: self.stage,
                action: "submit the role form",
            });
        }

        submission.property_type = self.property_type;
        submission.role_type = self.role_type;

        let issues = self.schema().validate(&submission);
        if !issues.is_empty() {
            return Err(FlowError::InvalidSubmission(issues));
        }

        self.submission = Some(submission);
        self.stage = OnboardingStage::FillingConfirmationStep;
        info!(
            property_type = ?self.property_type,
            role_type = ?self.role_type,
            "onboarding role form accepted"
        );

        Ok(self.stage)
    }
}
