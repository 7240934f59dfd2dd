use serde::{Deserialize, Serialize};

/// Dialling details for a signup country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2
    pub iso_code: String,
    pub dial_code: String,
    /// Permitted national-number lengths, excluding the dial code.
    pub valid_digit_counts: Vec<u32>,
}

const COUNTRY_TABLE: &[(&str, &str, &str, &[u32])] = &[
    ("India", "IN", "+91", &[10]),
    ("United States", "US", "+1", &[10]),
    ("United Kingdom", "GB", "+44", &[10]),
    ("Canada", "CA", "+1", &[10]),
    ("Australia", "AU", "+61", &[9]),
    ("United Arab Emirates", "AE", "+971", &[9]),
    ("Singapore", "SG", "+65", &[8]),
    ("Germany", "DE", "+49", &[10, 11]),
    ("France", "FR", "+33", &[9]),
    ("Japan", "JP", "+81", &[10]),
    ("China", "CN", "+86", &[11]),
    ("Nepal", "NP", "+977", &[10]),
    ("Bangladesh", "BD", "+880", &[10]),
    ("Sri Lanka", "LK", "+94", &[9]),
];

/// Countries offered on the signup form, India first.
pub fn countries() -> Vec<Country> {
    COUNTRY_TABLE
        .iter()
        .map(|(name, iso, dial, digits)| Country {
            name: name.to_string(),
            iso_code: iso.to_string(),
            dial_code: dial.to_string(),
            valid_digit_counts: digits.to_vec(),
        })
        .collect()
}

/// Look a country up by ISO code (case-insensitive) or by dial code. A dial
/// code shared by several countries resolves to the first listed.
pub fn find_country(code: &str) -> Option<Country> {
    let code = code.trim();
    countries().into_iter().find(|c| {
        c.iso_code.eq_ignore_ascii_case(code)
            || c.dial_code == code
            || c.dial_code.trim_start_matches('+') == code
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_iso_and_dial_code() {
        assert_eq!(find_country("in").unwrap().dial_code, "+91");
        assert_eq!(find_country("+44").unwrap().iso_code, "GB");
        assert_eq!(find_country("971").unwrap().iso_code, "AE");
        assert!(find_country("ZZ").is_none());
    }

    #[test]
    fn test_every_country_allows_some_length() {
        assert!(countries().iter().all(|c| !c.valid_digit_counts.is_empty()));
    }
}
