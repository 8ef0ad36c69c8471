use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::FormIssue;
use super::{is_blank, FormRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationFeeBasis {
    #[serde(rename = "All 18+ applicant")]
    AllAdultApplicants,
    #[serde(rename = "Per applicant")]
    PerApplicant,
    #[serde(rename = "Per application")]
    PerApplication,
    #[serde(rename = "Flat rate")]
    FlatRate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargesPayload {
    pub application_fee: ApplicationFeeBasis,
    /// Whole currency units.
    pub admin_fee: u32,
}

impl FormRules for ChargesPayload {
    fn issues(&self) -> Vec<FormIssue> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    Weekly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    Quarterly,
    Annually,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentFrequencyPayload {
    pub rent_payment_frequency: PaymentFrequency,
    pub rent_reminder_date: NaiveDate,
    pub rent_due_date: NaiveDate,
}

impl FormRules for RentFrequencyPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if self.rent_reminder_date > self.rent_due_date {
            vec![FormIssue::new(
                "rentReminderDate",
                "Reminder date must be on or before the due date",
            )]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
    Hamster,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFeesPayload {
    pub pet_type: PetType,
    /// Pounds.
    pub max_weight: u32,
    pub one_time_pet_fee: u32,
    pub pet_security_deposit: u32,
    pub monthly_pet_rent: u32,
}

impl FormRules for PetFeesPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if self.max_weight == 0 {
            vec![FormIssue::new("maxWeight", "Max weight is required")]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkingTime {
    #[serde(rename = "1H")]
    OneHour,
    #[serde(rename = "2H")]
    TwoHours,
    #[serde(rename = "3H")]
    ThreeHours,
    #[serde(rename = "4H")]
    FourHours,
    #[serde(rename = "6H")]
    SixHours,
    #[serde(rename = "12H")]
    TwelveHours,
    #[serde(rename = "24H")]
    AllDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingPayload {
    pub parking_time: ParkingTime,
    pub parking_overview: String,
}

impl FormRules for ParkingPayload {
    fn issues(&self) -> Vec<FormIssue> {
        if is_blank(&self.parking_overview) {
            vec![FormIssue::new(
                "parkingOverview",
                "Parking overview is required",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rent_reminder_cannot_follow_due_date() {
        let due = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
        let payload = RentFrequencyPayload {
            rent_payment_frequency: PaymentFrequency::Monthly,
            rent_reminder_date: due.succ_opt().expect("valid date"),
            rent_due_date: due,
        };
        let issues = payload.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "rentReminderDate");
    }

    #[test]
    fn choice_lists_use_form_option_labels() {
        let payload: RentFrequencyPayload = serde_json::from_value(json!({
            "rentPaymentFrequency": "Bi-weekly",
            "rentReminderDate": "2025-09-25",
            "rentDueDate": "2025-10-01",
        }))
        .expect("payload parses");
        assert_eq!(payload.rent_payment_frequency, PaymentFrequency::BiWeekly);

        let charges: ChargesPayload = serde_json::from_value(json!({
            "applicationFee": "All 18+ applicant",
            "adminFee": 150,
        }))
        .expect("charges parse");
        assert_eq!(charges.application_fee, ApplicationFeeBasis::AllAdultApplicants);

        let parking: ParkingPayload = serde_json::from_value(json!({
            "parkingTime": "24H",
            "parkingOverview": "Covered garage, one stall per unit",
        }))
        .expect("parking parses");
        assert_eq!(parking.parking_time, ParkingTime::AllDay);
        assert!(parking.issues().is_empty());
    }

    #[test]
    fn pet_fees_need_weight_limit() {
        let payload = PetFeesPayload {
            pet_type: PetType::Dog,
            max_weight: 0,
            one_time_pet_fee: 250,
            pet_security_deposit: 300,
            monthly_pet_rent: 35,
        };
        assert_eq!(payload.issues()[0].message, "Max weight is required");
    }
}
