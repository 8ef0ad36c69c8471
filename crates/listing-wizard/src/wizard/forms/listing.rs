use serde::{Deserialize, Serialize};

use super::super::domain::FormIssue;
use super::media::MediaRef;
use super::{is_blank, FormRules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAgreementPayload {
    pub agreement_file: Option<MediaRef>,
    #[serde(default)]
    pub accept_applications: bool,
}

impl FormRules for ApplicationAgreementPayload {
    fn issues(&self) -> Vec<FormIssue> {
        match &self.agreement_file {
            None => vec![FormIssue::new(
                "agreementFile",
                "Please upload the application agreement",
            )],
            Some(file) if !file.is_pdf() => {
                vec![FormIssue::new("agreementFile", "Only PDF files are allowed")]
            }
            Some(file) if !file.within_size_limit() => vec![FormIssue::new(
                "agreementFile",
                "File size must be less than 10MB",
            )],
            Some(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPropertyPayload {
    pub description: String,
}

impl FormRules for AboutPropertyPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if is_blank(&self.description) {
            vec![FormIssue::new("description", "Description is required")]
        } else {
            Vec::new()
        }
    }
}

/// Amenity catalogue offered by the amenities dialog: (id, display name).
pub const AMENITY_CATALOGUE: &[(&str, &str)] = &[
    ("air-conditioning", "Air conditioning"),
    ("cable-ready", "Cable ready"),
    ("ceiling-fan", "Ceiling fan"),
    ("high-ceilings", "High ceilings"),
    ("private-balcony", "Private balcony"),
    ("refrigerator", "Refrigerator"),
    ("wooded-views", "Wooded views"),
    ("wd-hookup", "W/D hookup"),
    ("hardwood-floor-home", "Hardwood Floor (home)"),
    ("fireplace-home", "Fireplace (home)"),
    ("first-aid-kit", "First aid kit"),
    ("carbon-monoxide-alarm", "Carbon monoxide alarm"),
    ("expanded-patios-home", "Expanded patios (home)"),
    ("free-parking-premises", "Free parking on premises"),
    ("fire-extinguisher", "Fire extinguisher"),
];

pub fn amenity_name(id: &str) -> Option<&'static str> {
    AMENITY_CATALOGUE
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, name)| *name)
}

/// An empty selection is a valid submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAmenitiesPayload {
    #[serde(default)]
    pub selected_amenities: Vec<String>,
}

impl FormRules for CommunityAmenitiesPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if self
            .selected_amenities
            .iter()
            .any(|id| amenity_name(id).is_none())
        {
            vec![FormIssue::new(
                "selectedAmenities",
                "Unknown amenity selected",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreement_requires_pdf_upload() {
        let missing = ApplicationAgreementPayload {
            agreement_file: None,
            accept_applications: true,
        };
        assert_eq!(
            missing.issues()[0].message,
            "Please upload the application agreement"
        );

        let image = ApplicationAgreementPayload {
            agreement_file: Some(MediaRef::new("lease.png", "image/png", 2048)),
            accept_applications: true,
        };
        assert_eq!(image.issues()[0].message, "Only PDF files are allowed");

        let pdf = ApplicationAgreementPayload {
            agreement_file: Some(MediaRef::new("lease.pdf", "application/pdf", 2048)),
            accept_applications: false,
        };
        assert!(pdf.issues().is_empty());
    }

    #[test]
    fn amenities_must_come_from_catalogue() {
        let known = CommunityAmenitiesPayload {
            selected_amenities: vec!["ceiling-fan".to_string(), "wd-hookup".to_string()],
        };
        assert!(known.issues().is_empty());
        assert!(CommunityAmenitiesPayload::default().issues().is_empty());

        let unknown = CommunityAmenitiesPayload {
            selected_amenities: vec!["rooftop-pool".to_string()],
        };
        assert_eq!(unknown.issues().len(), 1);
        assert_eq!(amenity_name("wd-hookup"), Some("W/D hookup"));
    }
}
