use crate::error::WealthError;
use crate::WealthResult;

pub const MIN_PASSWORD_LEN: usize = 6;

/// At least `MIN_PASSWORD_LEN` characters.
pub fn validate_password_strength(password: &str) -> WealthResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(WealthError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} chars"),
        ));
    }
    Ok(())
}

/// Confirmation must match byte for byte; no trimming or case folding.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> WealthResult<()> {
    if password.as_bytes() != confirmation.as_bytes() {
        return Err(WealthError::validation("confirm_password", "Passwords do not match"));
    }
    Ok(())
}

pub fn validate_password(password: &str, confirmation: &str) -> WealthResult<()> {
    validate_password_strength(password)?;
    validate_password_confirmation(password, confirmation)
}
