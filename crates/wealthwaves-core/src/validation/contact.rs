use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::WealthError;
use crate::validation::countries::Country;
use crate::WealthResult;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Strip formatting from a phone number and check its length against the
/// country's allowed digit counts. Returns the bare digits.
pub fn validate_phone(raw: &str, country: &Country) -> WealthResult<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(WealthError::Validation {
            field: "mobile".into(),
            reason: "Mobile number is required".into(),
            allowed: country.valid_digit_counts.clone(),
        });
    }

    if !country.valid_digit_counts.contains(&(digits.len() as u32)) {
        let allowed = country
            .valid_digit_counts
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(WealthError::Validation {
            field: "mobile".into(),
            reason: format!("{} numbers must have exactly {allowed} digits.", country.name),
            allowed: country.valid_digit_counts.clone(),
        });
    }

    Ok(digits)
}

/// `local@domain.tld` shape check; no whitespace and a single `@`.
pub fn validate_email(raw: &str) -> WealthResult<()> {
    if EMAIL_RE.is_match(raw) {
        Ok(())
    } else {
        Err(WealthError::validation("email", "Invalid email address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::countries::find_country;

    #[test]
    fn test_phone_strips_formatting() {
        let india = find_country("IN").unwrap();
        assert_eq!(validate_phone("98765 43210", &india).unwrap(), "9876543210");
        assert_eq!(validate_phone("(987) 654-3210", &india).unwrap(), "9876543210");
    }

    #[test]
    fn test_phone_wrong_length_carries_allowed_counts() {
        let india = find_country("IN").unwrap();
        match validate_phone("98765", &india).unwrap_err() {
            WealthError::Validation { reason, allowed, .. } => {
                assert_eq!(allowed, vec![10]);
                assert_eq!(reason, "India numbers must have exactly 10 digits.");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_phone_multiple_lengths() {
        let germany = find_country("DE").unwrap();
        assert!(validate_phone("0301234567", &germany).is_ok());
        assert!(validate_phone("03012345678", &germany).is_ok());
        let err = validate_phone("123", &germany).unwrap_err();
        assert_eq!(err.user_message(), "Germany numbers must have exactly 10 or 11 digits.");
    }

    #[test]
    fn test_phone_required() {
        let india = find_country("IN").unwrap();
        let err = validate_phone(" - ", &india).unwrap_err();
        assert_eq!(err.user_message(), "Mobile number is required");
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("priya@example.in").is_ok());
        assert!(validate_email("a.b+c@mail.co.uk").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("has space@example.com").is_err());
        assert!(validate_email("").is_err());
    }
}
