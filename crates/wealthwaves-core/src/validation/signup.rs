//! Whole-form onboarding check. Every rule runs so the form can show all
//! problems at once instead of one per submit.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::policy::AgePolicy;
use crate::validation::age::validate_dob;
use crate::validation::contact::{validate_email, validate_phone};
use crate::validation::countries::find_country;
use crate::validation::credentials::{validate_password_confirmation, validate_password_strength};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// ISO code or dial code of the selected country.
    pub country: String,
    pub dob: Option<NaiveDate>,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupReport {
    pub valid: bool,
    /// Field name → message, in a stable order.
    pub errors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Dial code plus bare digits, e.g. "+919876543210".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_mobile: Option<String>,
}

pub fn validate_signup(form: &SignupForm, as_of: NaiveDate, policy: &AgePolicy) -> SignupReport {
    let mut errors: BTreeMap<String, String> = BTreeMap::new();
    let mut record = |field: &str, err: WealthError| {
        errors
            .entry(field.to_string())
            .or_insert_with(|| err.user_message());
    };

    if form.name.trim().is_empty() {
        record("name", WealthError::validation("name", "Name is required"));
    }

    if let Err(e) = validate_email(&form.email) {
        record("email", e);
    }

    if let Err(e) = validate_password_strength(&form.password) {
        record("password", e);
    }
    if let Err(e) = validate_password_confirmation(&form.password, &form.confirm_password) {
        record("confirm_password", e);
    }

    let mut normalized_mobile = None;
    match find_country(&form.country) {
        Some(country) => match validate_phone(&form.mobile, &country) {
            Ok(digits) => normalized_mobile = Some(format!("{}{}", country.dial_code, digits)),
            Err(e) => record("mobile", e),
        },
        None => record(
            "country",
            WealthError::validation("country", "Please select a country"),
        ),
    }

    let mut age = None;
    match form.dob {
        None => record(
            "dob",
            WealthError::validation("dob", "Complete Date of Birth is required"),
        ),
        Some(dob) => match validate_dob(dob, as_of, policy) {
            Ok(a) => age = Some(a),
            Err(e) => record("dob", e),
        },
    }

    SignupReport {
        valid: errors.is_empty(),
        errors,
        age,
        normalized_mobile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Asha Verma".into(),
            email: "asha@example.in".into(),
            mobile: "98765-43210".into(),
            country: "IN".into(),
            dob: NaiveDate::from_ymd_opt(1995, 6, 1),
            password: "monsoon42".into(),
            confirm_password: "monsoon42".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let report = validate_signup(&valid_form(), today(), &AgePolicy::default());
        assert!(report.valid, "{:?}", report.errors);
        assert_eq!(report.age, Some(31));
        assert_eq!(report.normalized_mobile.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_collects_every_error() {
        let form = SignupForm {
            name: "  ".into(),
            email: "nope".into(),
            mobile: "123".into(),
            country: "IN".into(),
            dob: None,
            password: "abc".into(),
            confirm_password: "abd".into(),
        };
        let report = validate_signup(&form, today(), &AgePolicy::default());
        assert!(!report.valid);
        let fields: Vec<&str> = report.errors.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            fields,
            vec!["confirm_password", "dob", "email", "mobile", "name", "password"]
        );
        assert_eq!(report.errors["dob"], "Complete Date of Birth is required");
    }

    #[test]
    fn test_underage_applicant() {
        let mut form = valid_form();
        form.dob = NaiveDate::from_ymd_opt(2008, 10, 19);
        let report = validate_signup(&form, today(), &AgePolicy::default());
        assert_eq!(report.errors["dob"], "You must be at least 18 years old.");
        assert_eq!(report.age, None);
    }

    #[test]
    fn test_unknown_country() {
        let mut form = valid_form();
        form.country = "XX".into();
        let report = validate_signup(&form, today(), &AgePolicy::default());
        assert!(report.errors.contains_key("country"));
    }
}
