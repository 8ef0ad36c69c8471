use serde::{Deserialize, Serialize};

use super::super::domain::FormIssue;
use super::{is_blank, FormRules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAddressPayload {
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl FormRules for PropertyAddressPayload {
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        if self.address.trim().chars().count() < 5 {
            issues.push(FormIssue::new(
                "address",
                "Address must be at least 5 characters",
            ));
        }
        if self.city.trim().chars().count() < 2 {
            issues.push(FormIssue::new("city", "City is required"));
        }
        if let Some(code) = &self.postal_code {
            let digits = code.len();
            if !(4..=6).contains(&digits) || !code.chars().all(|c| c.is_ascii_digit()) {
                issues.push(FormIssue::new(
                    "postalCode",
                    "Postal code must be 4–6 digits",
                ));
            }
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasingInfoPayload {
    pub manager_name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub same_as_property: bool,
    pub street_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apt_suite_unit: Option<String>,
    pub city_town: String,
    pub state_territory: String,
    pub zip_code: String,
}

impl FormRules for LeasingInfoPayload {
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        if is_blank(&self.manager_name) {
            issues.push(FormIssue::new(
                "managerName",
                "Leasing manager name is required",
            ));
        }
        if !is_valid_phone_number(&self.phone_number) {
            issues.push(FormIssue::new("phoneNumber", "Invalid phone number"));
        }
        if !is_valid_email(&self.email) {
            issues.push(FormIssue::new(
                "email",
                "Please enter a valid email address",
            ));
        }
        if is_blank(&self.street_address) {
            issues.push(FormIssue::new("streetAddress", "Street address is required"));
        }
        if is_blank(&self.city_town) {
            issues.push(FormIssue::new("cityTown", "City/Town is required"));
        }
        if is_blank(&self.state_territory) {
            issues.push(FormIssue::new(
                "stateTerritory",
                "Please select a state/territory",
            ));
        }
        if self.zip_code.trim().chars().count() < 5 {
            issues.push(FormIssue::new(
                "zipCode",
                "Zip code must be at least 5 characters",
            ));
        }

        issues
    }
}

/// International format with a country code, checked against libphonenumber metadata.
fn is_valid_phone_number(raw: &str) -> bool {
    phonenumber::parse(None, raw.trim())
        .map(|number| phonenumber::is_valid(&number))
        .unwrap_or(false)
}

fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leasing() -> LeasingInfoPayload {
        LeasingInfoPayload {
            manager_name: "Dana Ruiz".to_string(),
            phone_number: "+1 (201) 555-0134".to_string(),
            email: "leasing@riverfront.example".to_string(),
            same_as_property: false,
            street_address: "400 Locust St".to_string(),
            apt_suite_unit: Some("Suite 2".to_string()),
            city_town: "Des Moines".to_string(),
            state_territory: "Iowa".to_string(),
            zip_code: "50309".to_string(),
        }
    }

    #[test]
    fn property_address_rules_follow_form_messages() {
        let payload = PropertyAddressPayload {
            address: "12".to_string(),
            city: "D".to_string(),
            postal_code: Some("12a4".to_string()),
        };
        let fields: Vec<_> = payload.issues().into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["address", "city", "postalCode"]);

        let valid = PropertyAddressPayload {
            address: "400 Locust St".to_string(),
            city: "Des Moines".to_string(),
            postal_code: None,
        };
        assert!(valid.issues().is_empty());
    }

    #[test]
    fn leasing_info_accepts_well_formed_contact() {
        assert!(leasing().issues().is_empty());
    }

    #[test]
    fn leasing_info_flags_contact_problems() {
        let mut payload = leasing();
        payload.phone_number = "555".to_string();
        payload.email = "leasing@".to_string();
        payload.zip_code = "503".to_string();

        let messages: Vec<_> = payload.issues().into_iter().map(|i| i.message).collect();
        assert_eq!(
            messages,
            vec![
                "Invalid phone number",
                "Please enter a valid email address",
                "Zip code must be at least 5 characters",
            ]
        );
    }

    #[test]
    fn phone_numbers_need_a_country_code_and_a_real_number_plan() {
        assert!(is_valid_phone_number("+1 201 555 0123"));
        assert!(!is_valid_phone_number("12345678"));
        assert!(!is_valid_phone_number("+1 000 000 0000"));
        assert!(!is_valid_phone_number("not a number"));
    }

    #[test]
    fn email_check_requires_domain_with_suffix() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }
}
