use super::domain::{AgreementPolicy, DisplayColumn, FieldKey, FieldNote, FormKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub key: FieldKey,
    pub required: bool,
    pub label: &'static str,
    pub note: FieldNote,
    pub column: DisplayColumn,
    pub form: FormKind,
}

impl FieldDefinition {
    pub const fn new(
        key: FieldKey,
        required: bool,
        label: &'static str,
        note: FieldNote,
        column: DisplayColumn,
    ) -> Self {
        Self {
            key,
            required,
            label,
            note,
            column,
            form: key.form(),
        }
    }
}

/// Ordered field table backing one wizard screen.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    definitions: Vec<FieldDefinition>,
}

impl FieldRegistry {
    /// Condominium information screen with the application agreement optional.
    pub fn standard() -> Self {
        Self::with_agreement_policy(AgreementPolicy::Optional)
    }

    pub fn with_agreement_policy(policy: AgreementPolicy) -> Self {
        Self {
            definitions: standard_definitions(policy),
        }
    }

    /// Accepts any table; duplicate or empty tables are rejected when the state is built.
    pub fn from_definitions(definitions: Vec<FieldDefinition>) -> Self {
        Self { definitions }
    }

    pub fn list(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn definition(&self, key: FieldKey) -> Option<&FieldDefinition> {
        self.definitions.iter().find(|definition| definition.key == key)
    }

    pub fn column(&self, column: DisplayColumn) -> Vec<&FieldDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.column == column)
            .collect()
    }

    pub fn left(&self) -> Vec<&FieldDefinition> {
        self.column(DisplayColumn::Left)
    }

    pub fn right(&self) -> Vec<&FieldDefinition> {
        self.column(DisplayColumn::Right)
    }

    pub fn required_keys(&self) -> Vec<FieldKey> {
        self.definitions
            .iter()
            .filter(|definition| definition.required)
            .map(|definition| definition.key)
            .collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_definitions(policy: AgreementPolicy) -> Vec<FieldDefinition> {
    use DisplayColumn::{Footer, Left, Right};

    let agreement_note = if policy.is_required() {
        FieldNote::Required
    } else {
        FieldNote::Optional
    };

    vec![
        FieldDefinition::new(
            FieldKey::PropertyAddress,
            true,
            "Property address",
            FieldNote::Required,
            Left,
        ),
        FieldDefinition::new(
            FieldKey::LeasingInfo,
            true,
            "Leasing info",
            FieldNote::Required,
            Left,
        ),
        FieldDefinition::new(FieldKey::Charges, true, "Charges", FieldNote::Required, Left),
        FieldDefinition::new(
            FieldKey::RentFrequency,
            true,
            "Rent frequency & payment reminder",
            FieldNote::Required,
            Left,
        ),
        FieldDefinition::new(
            FieldKey::ApplicationAgreement,
            policy.is_required(),
            "Application agreement",
            agreement_note,
            Left,
        ),
        FieldDefinition::new(
            FieldKey::AboutProperty,
            false,
            "About the property",
            FieldNote::Optional,
            Left,
        ),
        FieldDefinition::new(
            FieldKey::CommunityAmenities,
            false,
            "Community’s amenity/features",
            FieldNote::Recommended,
            Left,
        ),
        FieldDefinition::new(
            FieldKey::PetFees,
            false,
            "Pet fees",
            FieldNote::OptionalIfPetsAllowed,
            Right,
        ),
        FieldDefinition::new(FieldKey::Parking, false, "Parking", FieldNote::Optional, Right),
        FieldDefinition::new(
            FieldKey::NearestEducational,
            false,
            "Nearest educational institution",
            FieldNote::Recommended,
            Right,
        ),
        FieldDefinition::new(
            FieldKey::NearestStations,
            false,
            "Nearest stations",
            FieldNote::Recommended,
            Right,
        ),
        FieldDefinition::new(
            FieldKey::NearestLandmark,
            false,
            "Nearest landmark",
            FieldNote::Recommended,
            Right,
        ),
        FieldDefinition::new(
            FieldKey::UtilitiesProvider,
            false,
            "Utilities provider",
            FieldNote::Recommended,
            Right,
        ),
        FieldDefinition::new(
            FieldKey::PropertyGallery,
            true,
            "Property gallery",
            FieldNote::Required,
            Footer,
        ),
    ]
}
