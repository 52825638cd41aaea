//! Credential validation rules shared by registration and request DTOs

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length, in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum accepted password length, in bytes. bcrypt ignores anything past
/// this point.
pub const PASSWORD_MAX_BYTES: usize = 72;

/// The only non-alphanumeric characters a password may contain
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Password rule that a candidate password breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    /// Fewer than [`PASSWORD_MIN_LENGTH`] characters
    TooShort,
    /// Longer than [`PASSWORD_MAX_BYTES`] bytes
    TooLong,
    /// Missing a required character class, or containing a character
    /// outside letters, digits and [`PASSWORD_SPECIAL_CHARS`]
    Pattern,
}

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn is_special(c: char) -> bool {
    PASSWORD_SPECIAL_CHARS.contains(c)
}

/// Check password strength.
///
/// Length bounds are checked first; then the password must contain at least one
/// lowercase letter, one uppercase letter, one digit and one special
/// character, and nothing else.
pub fn check_password_strength(password: &str) -> Result<(), PasswordViolation> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(PasswordViolation::TooShort);
    }
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(PasswordViolation::TooLong);
    }

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special);

    if allowed && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(PasswordViolation::Pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("john.doe+recipes@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_strong_password_accepted() {
        assert_eq!(check_password_strength("Str0ng!Pw"), Ok(()));
        assert_eq!(check_password_strength("P@ss1234"), Ok(()));
    }

    #[test]
    fn test_short_password_rejected_before_pattern() {
        assert_eq!(check_password_strength("Weakpw1"), Err(PasswordViolation::TooShort));
        assert_eq!(check_password_strength("a!1B"), Err(PasswordViolation::TooShort));
    }

    #[test]
    fn test_password_length_capped_at_bcrypt_limit() {
        let at_limit = format!("Str0ng!P{}", "w".repeat(PASSWORD_MAX_BYTES - 8));
        assert_eq!(at_limit.len(), PASSWORD_MAX_BYTES);
        assert_eq!(check_password_strength(&at_limit), Ok(()));

        let over_limit = format!("{}A", "Str0ng!Pw".repeat(8));
        assert_eq!(check_password_strength(&over_limit), Err(PasswordViolation::TooLong));
    }

    #[test]
    fn test_missing_character_classes() {
        // no special character
        assert_eq!(check_password_strength("Weakpass1"), Err(PasswordViolation::Pattern));
        // no digit
        assert_eq!(check_password_strength("Weakpass!"), Err(PasswordViolation::Pattern));
        // no uppercase
        assert_eq!(check_password_strength("weakpa$s1"), Err(PasswordViolation::Pattern));
        // no lowercase
        assert_eq!(check_password_strength("WEAKPA$S1"), Err(PasswordViolation::Pattern));
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(check_password_strength("Str0ng!Pw#"), Err(PasswordViolation::Pattern));
        assert_eq!(check_password_strength("Str0ng! Pw"), Err(PasswordViolation::Pattern));
    }
}
