//! Typed payloads for every wizard dialog and the client-side rules the
//! dialogs enforce before a submission is accepted.

mod fees;
mod listing;
mod location;
mod media;
mod nearby;

pub use fees::{
    ApplicationFeeBasis, ChargesPayload, ParkingPayload, ParkingTime, PaymentFrequency,
    PetFeesPayload, PetType, RentFrequencyPayload,
};
pub use listing::{
    amenity_name, AboutPropertyPayload, ApplicationAgreementPayload, CommunityAmenitiesPayload,
    AMENITY_CATALOGUE,
};
pub use location::{LeasingInfoPayload, PropertyAddressPayload};
pub use media::{GalleryPayload, MediaRef, MAX_ADDITIONAL_PHOTOS, MAX_UPLOAD_BYTES};
pub use nearby::{
    Distance, DistanceUnit, InstitutionType, LandmarkType, NearestEducationalPayload,
    NearestLandmarkPayload, NearestStationsPayload, StationType, UtilitiesProviderPayload,
    UtilityType,
};

use super::domain::{FieldKey, FormIssue, FormKind};
use serde::{Deserialize, Serialize};

/// Validation contract implemented by every payload.
pub trait FormRules {
    /// Every failed rule, in field order. Empty means the submission is accepted.
    fn issues(&self) -> Vec<FormIssue>;
}

/// A completed dialog submission, tagged by the form that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", content = "data", rename_all = "snake_case")]
pub enum FormPayload {
    PropertyAddress(PropertyAddressPayload),
    LeasingInfo(LeasingInfoPayload),
    Charges(ChargesPayload),
    RentFrequency(RentFrequencyPayload),
    ApplicationAgreement(ApplicationAgreementPayload),
    AboutProperty(AboutPropertyPayload),
    CommunityAmenities(CommunityAmenitiesPayload),
    PetFees(PetFeesPayload),
    Parking(ParkingPayload),
    NearestEducational(NearestEducationalPayload),
    NearestStations(NearestStationsPayload),
    NearestLandmark(NearestLandmarkPayload),
    UtilitiesProvider(UtilitiesProviderPayload),
    PropertyGallery(GalleryPayload),
}

impl FormPayload {
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::PropertyAddress(_) => FormKind::PropertyAddressForm,
            Self::LeasingInfo(_) => FormKind::LeasingInfoForm,
            Self::Charges(_) => FormKind::ChargesForm,
            Self::RentFrequency(_) => FormKind::RentFrequencyForm,
            Self::ApplicationAgreement(_) => FormKind::ApplicationAgreementForm,
            Self::AboutProperty(_) => FormKind::AboutPropertyForm,
            Self::CommunityAmenities(_) => FormKind::CommunityAmenitiesForm,
            Self::PetFees(_) => FormKind::PetFeesForm,
            Self::Parking(_) => FormKind::ParkingForm,
            Self::NearestEducational(_) => FormKind::NearestEducationalForm,
            Self::NearestStations(_) => FormKind::NearestStationsForm,
            Self::NearestLandmark(_) => FormKind::NearestLandmarkForm,
            Self::UtilitiesProvider(_) => FormKind::UtilitiesProviderForm,
            Self::PropertyGallery(_) => FormKind::PropertyGallery,
        }
    }

    pub const fn field_key(&self) -> FieldKey {
        match self {
            Self::PropertyAddress(_) => FieldKey::PropertyAddress,
            Self::LeasingInfo(_) => FieldKey::LeasingInfo,
            Self::Charges(_) => FieldKey::Charges,
            Self::RentFrequency(_) => FieldKey::RentFrequency,
            Self::ApplicationAgreement(_) => FieldKey::ApplicationAgreement,
            Self::AboutProperty(_) => FieldKey::AboutProperty,
            Self::CommunityAmenities(_) => FieldKey::CommunityAmenities,
            Self::PetFees(_) => FieldKey::PetFees,
            Self::Parking(_) => FieldKey::Parking,
            Self::NearestEducational(_) => FieldKey::NearestEducational,
            Self::NearestStations(_) => FieldKey::NearestStations,
            Self::NearestLandmark(_) => FieldKey::NearestLandmark,
            Self::UtilitiesProvider(_) => FieldKey::UtilitiesProvider,
            Self::PropertyGallery(_) => FieldKey::PropertyGallery,
        }
    }

    pub const fn as_gallery(&self) -> Option<&GalleryPayload> {
        match self {
            Self::PropertyGallery(gallery) => Some(gallery),
            _ => None,
        }
    }
}

impl FormRules for FormPayload {
    fn issues(&self) -> Vec<FormIssue> {
        match self {
            Self::PropertyAddress(payload) => payload.issues(),
            Self::LeasingInfo(payload) => payload.issues(),
            Self::Charges(payload) => payload.issues(),
            Self::RentFrequency(payload) => payload.issues(),
            Self::ApplicationAgreement(payload) => payload.issues(),
            Self::AboutProperty(payload) => payload.issues(),
            Self::CommunityAmenities(payload) => payload.issues(),
            Self::PetFees(payload) => payload.issues(),
            Self::Parking(payload) => payload.issues(),
            Self::NearestEducational(payload) => payload.issues(),
            Self::NearestStations(payload) => payload.issues(),
            Self::NearestLandmark(payload) => payload.issues(),
            Self::UtilitiesProvider(payload) => payload.issues(),
            Self::PropertyGallery(payload) => payload.issues(),
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_payload_maps_back_to_its_field_form() {
        let payloads = vec![
            FormPayload::AboutProperty(AboutPropertyPayload {
                description: "Quiet courtyard building".to_string(),
            }),
            FormPayload::CommunityAmenities(CommunityAmenitiesPayload::default()),
            FormPayload::PropertyGallery(GalleryPayload::default()),
        ];

        for payload in payloads {
            assert_eq!(payload.field_key().form(), payload.kind());
        }
    }

    #[test]
    fn payload_wire_shape_is_adjacently_tagged() {
        let payload: FormPayload = serde_json::from_value(json!({
            "form": "about_property",
            "data": { "description": "Walkable to downtown" }
        }))
        .expect("payload parses");

        assert_eq!(payload.field_key(), FieldKey::AboutProperty);
        assert!(payload.issues().is_empty());

        let round = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(round["form"], "about_property");
    }
}
