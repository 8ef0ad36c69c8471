use chrono::NaiveDate;

use crate::wizard::forms::{
    ApplicationFeeBasis, ChargesPayload, GalleryPayload, LeasingInfoPayload, MediaRef,
    PaymentFrequency, PropertyAddressPayload, RentFrequencyPayload,
};
use crate::wizard::{
    DisplayColumn, FieldDefinition, FieldKey, FieldNote, FieldRegistry, FormPayload,
    PropertyType, RoleFormSubmission, RoleType,
};

pub(super) fn address() -> FormPayload {
    FormPayload::PropertyAddress(PropertyAddressPayload {
        address: "221 Maple Avenue".to_string(),
        city: "Des Moines".to_string(),
        postal_code: Some("50309".to_string()),
    })
}

pub(super) fn leasing_info() -> FormPayload {
    FormPayload::LeasingInfo(LeasingInfoPayload {
        manager_name: "Jordan Reyes".to_string(),
        phone_number: "+12015550123".to_string(),
        email: "leasing@maple.example".to_string(),
        same_as_property: true,
        street_address: "221 Maple Avenue".to_string(),
        apt_suite_unit: None,
        city_town: "Des Moines".to_string(),
        state_territory: "IA".to_string(),
        zip_code: "50309".to_string(),
    })
}

pub(super) fn charges() -> FormPayload {
    FormPayload::Charges(ChargesPayload {
        application_fee: ApplicationFeeBasis::PerApplicant,
        admin_fee: 75,
    })
}

pub(super) fn rent_frequency() -> FormPayload {
    FormPayload::RentFrequency(RentFrequencyPayload {
        rent_payment_frequency: PaymentFrequency::Monthly,
        rent_reminder_date: NaiveDate::from_ymd_opt(2025, 10, 25).expect("valid reminder date"),
        rent_due_date: NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid due date"),
    })
}

pub(super) fn cover_photo() -> MediaRef {
    MediaRef::new("front.jpg", "image/jpeg", 512 * 1024)
}

pub(super) fn gallery_with_cover() -> FormPayload {
    FormPayload::PropertyGallery(GalleryPayload::with_cover(cover_photo()))
}

pub(super) fn gallery_without_cover() -> FormPayload {
    FormPayload::PropertyGallery(GalleryPayload {
        cover: None,
        more: vec![MediaRef::new("kitchen.png", "image/png", 1024)],
    })
}

/// Every required field of the standard registry, gallery included.
pub(super) fn required_submissions() -> Vec<FormPayload> {
    vec![
        address(),
        leasing_info(),
        charges(),
        rent_frequency(),
        gallery_with_cover(),
    ]
}

/// Address and gallery, both required.
pub(super) fn address_and_gallery_registry() -> FieldRegistry {
    FieldRegistry::from_definitions(vec![
        FieldDefinition::new(
            FieldKey::PropertyAddress,
            true,
            "Property address",
            FieldNote::Required,
            DisplayColumn::Left,
        ),
        FieldDefinition::new(
            FieldKey::PropertyGallery,
            true,
            "Property gallery",
            FieldNote::Required,
            DisplayColumn::Footer,
        ),
    ])
}

pub(super) fn ownership_doc() -> MediaRef {
    MediaRef::new("deed.pdf", "application/pdf", 300 * 1024)
}

pub(super) fn complete_submission(
    property_type: PropertyType,
    role_type: Option<RoleType>,
) -> RoleFormSubmission {
    RoleFormSubmission {
        property_type: Some(property_type),
        role_type,
        ownership_doc: Some(ownership_doc()),
        accept_terms: true,
        landlord_license_number: Some("IA-LL-20931".to_string()),
        realtor_agency_name: Some("Maple Realty".to_string()),
    }
}
