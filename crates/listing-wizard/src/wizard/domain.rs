use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one wizard data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    PropertyAddress,
    LeasingInfo,
    Charges,
    RentFrequency,
    ApplicationAgreement,
    AboutProperty,
    CommunityAmenities,
    PetFees,
    Parking,
    NearestEducational,
    NearestStations,
    NearestLandmark,
    UtilitiesProvider,
    PropertyGallery,
}

impl FieldKey {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::PropertyAddress,
            Self::LeasingInfo,
            Self::Charges,
            Self::RentFrequency,
            Self::ApplicationAgreement,
            Self::AboutProperty,
            Self::CommunityAmenities,
            Self::PetFees,
            Self::Parking,
            Self::NearestEducational,
            Self::NearestStations,
            Self::NearestLandmark,
            Self::UtilitiesProvider,
            Self::PropertyGallery,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PropertyAddress => "propertyAddress",
            Self::LeasingInfo => "leasingInfo",
            Self::Charges => "charges",
            Self::RentFrequency => "rentFrequency",
            Self::ApplicationAgreement => "applicationAgreement",
            Self::AboutProperty => "aboutProperty",
            Self::CommunityAmenities => "communityAmenities",
            Self::PetFees => "petFees",
            Self::Parking => "parking",
            Self::NearestEducational => "nearestEducational",
            Self::NearestStations => "nearestStations",
            Self::NearestLandmark => "nearestLandmark",
            Self::UtilitiesProvider => "utilitiesProvider",
            Self::PropertyGallery => "propertyGallery",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// The form used to populate this field.
    pub const fn form(self) -> FormKind {
        match self {
            Self::PropertyAddress => FormKind::PropertyAddressForm,
            Self::LeasingInfo => FormKind::LeasingInfoForm,
            Self::Charges => FormKind::ChargesForm,
            Self::RentFrequency => FormKind::RentFrequencyForm,
            Self::ApplicationAgreement => FormKind::ApplicationAgreementForm,
            Self::AboutProperty => FormKind::AboutPropertyForm,
            Self::CommunityAmenities => FormKind::CommunityAmenitiesForm,
            Self::PetFees => FormKind::PetFeesForm,
            Self::Parking => FormKind::ParkingForm,
            Self::NearestEducational => FormKind::NearestEducationalForm,
            Self::NearestStations => FormKind::NearestStationsForm,
            Self::NearestLandmark => FormKind::NearestLandmarkForm,
            Self::UtilitiesProvider => FormKind::UtilitiesProviderForm,
            Self::PropertyGallery => FormKind::PropertyGallery,
        }
    }

    pub const fn is_gallery(self) -> bool {
        matches!(self, Self::PropertyGallery)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of dialog forms; each one owns a typed payload in `forms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    PropertyAddressForm,
    LeasingInfoForm,
    ChargesForm,
    RentFrequencyForm,
    ApplicationAgreementForm,
    AboutPropertyForm,
    CommunityAmenitiesForm,
    PetFeesForm,
    ParkingForm,
    NearestEducationalForm,
    NearestStationsForm,
    NearestLandmarkForm,
    UtilitiesProviderForm,
    PropertyGallery,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PropertyAddressForm => "PropertyAddressForm",
            Self::LeasingInfoForm => "LeasingInfoForm",
            Self::ChargesForm => "ChargesForm",
            Self::RentFrequencyForm => "RentFrequencyForm",
            Self::ApplicationAgreementForm => "ApplicationAgreementForm",
            Self::AboutPropertyForm => "AboutPropertyForm",
            Self::CommunityAmenitiesForm => "CommunityAmenitiesForm",
            Self::PetFeesForm => "PetFeesForm",
            Self::ParkingForm => "ParkingForm",
            Self::NearestEducationalForm => "NearestEducationalForm",
            Self::NearestStationsForm => "NearestStationsForm",
            Self::NearestLandmarkForm => "NearestLandmarkForm",
            Self::UtilitiesProviderForm => "UtilitiesProviderForm",
            Self::PropertyGallery => "PropertyGallery",
        }
    }
}

/// Card grouping on the information screen. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColumn {
    Left,
    Right,
    /// Rendered below the card grid (the gallery uploader).
    Footer,
}

/// Hint rendered next to a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNote {
    Required,
    Optional,
    Recommended,
    OptionalIfPetsAllowed,
}

impl FieldNote {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "(Required)",
            Self::Optional => "(Optional)",
            Self::Recommended => "(Optional but recommended)",
            Self::OptionalIfPetsAllowed => "(Optional, add fees if you allow pet)",
        }
    }
}

/// Whether the application agreement must be completed before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementPolicy {
    #[default]
    Optional,
    Required,
}

impl AgreementPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "optional" => Some(Self::Optional),
            "required" => Some(Self::Required),
            _ => None,
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Registry problems detected while building the wizard state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("field {0} is registered more than once")]
    DuplicateKey(FieldKey),
    #[error("field registry is empty")]
    EmptyRegistry,
}

/// Single failed rule reported by a form validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl FormIssue {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Errors raised by the field state store and wizard controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("invalid field registry: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("field {0} is not part of this wizard")]
    UnknownKey(FieldKey),
    #[error("field {key} cannot accept a {} payload", .form.label())]
    PayloadMismatch { key: FieldKey, form: FormKind },
    #[error("submission for {key} failed validation ({} issue(s))", .issues.len())]
    InvalidPayload { key: FieldKey, issues: Vec<FormIssue> },
}
