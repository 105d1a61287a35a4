//! Vehicle document validation: placa, RENAVAM, and chassi.

/// Validates a Brazilian license plate.
///
/// Accepts the legacy pattern (`AAA0000`) and the Mercosul pattern
/// (`AAA0A00`). Lowercase letters and a separating hyphen are tolerated.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_placa;
///
/// assert!(is_valid_placa("ABC1234"));
/// assert!(is_valid_placa("ABC-1234"));
/// assert!(is_valid_placa("ABC1D23"));
/// assert!(!is_valid_placa("AB12345"));
/// ```
pub fn is_valid_placa(placa: &str) -> bool {
    let normalized: Vec<char> = placa
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.len() != 7 {
        return false;
    }

    let letter = |c: char| c.is_ascii_uppercase();
    let digit = |c: char| c.is_ascii_digit();

    let prefix_ok = normalized[..3].iter().all(|c| letter(*c));
    let legacy = normalized[3..].iter().all(|c| digit(*c));
    let mercosul = digit(normalized[3])
        && letter(normalized[4])
        && digit(normalized[5])
        && digit(normalized[6]);

    prefix_ok && (legacy || mercosul)
}

/// Validates a RENAVAM (vehicle registration number): exactly 11 digits.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_renavam;
///
/// assert!(is_valid_renavam("12345678901"));
/// assert!(!is_valid_renavam("1234567890"));
/// ```
pub fn is_valid_renavam(renavam: &str) -> bool {
    renavam.chars().filter(|c| c.is_ascii_digit()).count() == 11
}

/// Validates a chassi (VIN): 17 alphanumeric characters, excluding the
/// letters I, O, and Q per the VIN convention.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_chassi;
///
/// assert!(is_valid_chassi("9BWZZZ377VT004251"));
/// assert!(!is_valid_chassi("9BWZZZ377VT00425I"));
/// ```
pub fn is_valid_chassi(chassi: &str) -> bool {
    chassi.chars().count() == 17
        && chassi.chars().all(|c| {
            let upper = c.to_ascii_uppercase();
            c.is_ascii_alphanumeric() && !matches!(upper, 'I' | 'O' | 'Q')
        })
}
