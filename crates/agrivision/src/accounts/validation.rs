use super::domain::MobileNumber;
use super::service::AuthError;

/// Strips spaces and dashes, then requires exactly ten ASCII digits starting with 6-9.
pub fn validate_mobile(raw: &str) -> Result<MobileNumber, AuthError> {
    if raw.is_empty() {
        return Err(AuthError::MissingMobile);
    }

    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::NonNumericMobile);
    }
    if cleaned.len() != 10 {
        return Err(AuthError::MobileLength);
    }
    if !matches!(cleaned.as_bytes()[0], b'6'..=b'9') {
        return Err(AuthError::MobilePrefix);
    }

    Ok(MobileNumber(cleaned))
}

/// Phone check for the password login, which accepts any ten digits.
pub(crate) fn validate_login_phone(raw: &str) -> Result<String, AuthError> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(AuthError::MissingPhone);
    }
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::PhoneLength);
    }
    Ok(phone.to_string())
}

/// A letter, a digit and at least one non-alphanumeric character.
pub fn is_strong_password(password: &str) -> bool {
    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());
    has_letter && has_digit && has_special
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_ignores_spaces_and_dashes() {
        let mobile = validate_mobile("98470 12-345").expect("valid mobile");
        assert_eq!(mobile.as_str(), "9847012345");
        assert_eq!(mobile.masked(), "******2345");
    }

    #[test]
    fn mobile_rejections_follow_rule_order() {
        assert!(matches!(validate_mobile(""), Err(AuthError::MissingMobile)));
        assert!(matches!(
            validate_mobile("   "),
            Err(AuthError::NonNumericMobile)
        ));
        assert!(matches!(
            validate_mobile("98470abcde"),
            Err(AuthError::NonNumericMobile)
        ));
        assert!(matches!(
            validate_mobile("984701234"),
            Err(AuthError::MobileLength)
        ));
        assert!(matches!(
            validate_mobile("5847012345"),
            Err(AuthError::MobilePrefix)
        ));
    }

    #[test]
    fn password_needs_all_three_classes() {
        assert!(is_strong_password("kerala@2024"));
        assert!(!is_strong_password("kerala2024"));
        assert!(!is_strong_password("kerala@@"));
        assert!(!is_strong_password("2024@@"));
        assert!(!is_strong_password(""));
    }

    #[test]
    fn login_phone_accepts_any_ten_digits() {
        assert_eq!(validate_login_phone(" 1234567890 ").unwrap(), "1234567890");
        assert!(matches!(
            validate_login_phone(""),
            Err(AuthError::MissingPhone)
        ));
        assert!(matches!(
            validate_login_phone("12345"),
            Err(AuthError::PhoneLength)
        ));
    }
}
