use chrono::{Datelike, NaiveDate};

use crate::error::WealthError;
use crate::policy::AgePolicy;
use crate::WealthResult;

/// Whole years between `dob` and `as_of`, one less if the birthday has not
/// come round yet this year. A 29 February birthday counts from 1 March in
/// common years.
pub fn age_on(dob: NaiveDate, as_of: NaiveDate) -> WealthResult<u32> {
    if dob > as_of {
        return Err(WealthError::InvalidInput {
            field: "dob".into(),
            reason: "Date of birth cannot be in the future".into(),
        });
    }

    let mut age = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Ok(age as u32)
}

/// Age from a date of birth, refusing implausible ones.
pub fn age_from_dob(dob: NaiveDate, as_of: NaiveDate, policy: &AgePolicy) -> WealthResult<u32> {
    let age = age_on(dob, as_of)?;
    if age > policy.max_age {
        return Err(WealthError::InvalidInput {
            field: "dob".into(),
            reason: format!("Age of {age} exceeds the {}-year limit", policy.max_age),
        });
    }
    Ok(age)
}

/// Age check used by signup: plausible and at least `policy.min_age`.
pub fn validate_dob(dob: NaiveDate, as_of: NaiveDate, policy: &AgePolicy) -> WealthResult<u32> {
    let age = age_from_dob(dob, as_of, policy)?;
    if age < policy.min_age {
        return Err(WealthError::Validation {
            field: "dob".into(),
            reason: format!("You must be at least {} years old.", policy.min_age),
            allowed: Vec::new(),
        });
    }
    Ok(age)
}
