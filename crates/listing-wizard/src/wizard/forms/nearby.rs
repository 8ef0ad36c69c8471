use serde::{Deserialize, Serialize};

use super::super::domain::FormIssue;
use super::{is_blank, FormRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

/// Distance from the property to a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distance {
    pub distance: f32,
    pub distance_unit: DistanceUnit,
}

impl Distance {
    fn issue(&self) -> Option<FormIssue> {
        if self.distance.is_finite() && self.distance > 0.0 {
            None
        } else {
            Some(FormIssue::new(
                "distance",
                "Distance must be greater than zero",
            ))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionType {
    Preschool,
    Elementary,
    #[serde(rename = "Middle school")]
    MiddleSchool,
    #[serde(rename = "High school")]
    HighSchool,
    College,
    University,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestEducationalPayload {
    pub institution_type: InstitutionType,
    #[serde(flatten)]
    pub distance: Distance,
    pub institution_name: String,
}

impl FormRules for NearestEducationalPayload {
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues: Vec<FormIssue> = self.distance.issue().into_iter().collect();
        if is_blank(&self.institution_name) {
            issues.push(FormIssue::new(
                "institutionName",
                "Institution name is required",
            ));
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationType {
    Bus,
    Train,
    Metro,
    Subway,
    Tram,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestStationsPayload {
    pub station_type: StationType,
    #[serde(flatten)]
    pub distance: Distance,
    pub station_name: String,
}

impl FormRules for NearestStationsPayload {
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues: Vec<FormIssue> = self.distance.issue().into_iter().collect();
        if is_blank(&self.station_name) {
            issues.push(FormIssue::new("stationName", "Station name is required"));
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandmarkType {
    Museum,
    Park,
    School,
    Hospital,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestLandmarkPayload {
    pub landmark_type: LandmarkType,
    #[serde(flatten)]
    pub distance: Distance,
    pub landmark_name: String,
}

impl FormRules for NearestLandmarkPayload {
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues: Vec<FormIssue> = self.distance.issue().into_iter().collect();
        if is_blank(&self.landmark_name) {
            issues.push(FormIssue::new("landmarkName", "Landmark name is required"));
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilityType {
    Electricity,
    Water,
    Gas,
    Internet,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilitiesProviderPayload {
    pub utility_type: UtilityType,
    pub provider_company_name: String,
}

impl FormRules for UtilitiesProviderPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if is_blank(&self.provider_company_name) {
            vec![FormIssue::new(
                "providerCompanyName",
                "Provider company name is required",
            )]
        } else {
            Vec::new()
        }
    }
}
