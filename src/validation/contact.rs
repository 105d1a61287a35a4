//! Email, phone, and CEP validation.

/// Counts the decimal digits of a string.
fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Validates an email address structurally.
///
/// This is a form-level check, not full RFC compliance: exactly one `@`, a
/// non-empty local part, and a domain containing an interior dot.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_email;
///
/// assert!(is_valid_email("financeiro@grupo2s.com.br"));
/// assert!(!is_valid_email("sem-arroba.com"));
/// assert!(!is_valid_email("dois@@arroba.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validates a Brazilian phone number: 10 digits (landline) or 11 (mobile).
///
/// Formatting characters are ignored.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_phone;
///
/// assert!(is_valid_phone("(11) 98765-4321"));
/// assert!(is_valid_phone("1133334444"));
/// assert!(!is_valid_phone("123"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(digit_count(phone), 10 | 11)
}

/// Validates a CEP (Brazilian postal code): exactly 8 digits.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_cep;
///
/// assert!(is_valid_cep("01310-100"));
/// assert!(is_valid_cep("01310100"));
/// assert!(!is_valid_cep("0131010"));
/// ```
pub fn is_valid_cep(cep: &str) -> bool {
    digit_count(cep) == 8
}
