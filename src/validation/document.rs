//! CPF and CNPJ validation.
//!
//! Both documents use the official weighted modulo-11 check-digit scheme.
//! Formatting characters are stripped before validation, so both bare and
//! punctuated inputs are accepted.

/// Extracts the decimal digits of a string.
fn digits_of(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// True when every digit is the same (e.g. "11111111111").
///
/// All-equal sequences pass the modulo-11 check but are not valid documents,
/// so they are rejected explicitly.
fn all_digits_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Validates a CPF (Brazilian individual taxpayer number).
///
/// Strips non-digits, rejects wrong lengths and all-equal-digit sequences,
/// and verifies the two official check digits.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("11111111111"));
/// assert!(!is_valid_cpf("52998224724"));
/// ```
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits = digits_of(cpf);
    if digits.len() != 11 || all_digits_equal(&digits) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let first_weight = (len + 1) as u32;
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (first_weight - i as u32))
            .sum();
        let remainder = (sum * 10) % 11;
        if remainder == 10 { 0 } else { remainder }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// Validates a CNPJ (Brazilian company taxpayer number).
///
/// Strips non-digits, rejects wrong lengths and all-equal-digit sequences,
/// and verifies the two official check digits.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11.222.333/0001-81"));
/// assert!(is_valid_cnpj("11222333000181"));
/// assert!(!is_valid_cnpj("11222333000180"));
/// ```
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let digits = digits_of(cnpj);
    if digits.len() != 14 || all_digits_equal(&digits) {
        return false;
    }

    const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let check_digit = |len: usize| -> u32 {
        let weights = &WEIGHTS[13 - len..];
        let sum: u32 = digits[..len]
            .iter()
            .zip(weights)
            .map(|(d, w)| d * w)
            .sum();
        let remainder = sum % 11;
        if remainder < 2 { 0 } else { 11 - remainder }
    };

    check_digit(12) == digits[12] && check_digit(13) == digits[13]
}
