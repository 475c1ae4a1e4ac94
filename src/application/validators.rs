/// Whitespace as browsers' `trim()` and `\s` see it, which includes the BOM.
fn is_email_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trims surrounding whitespace and lowercases the address.
pub fn normalize_email(email: &str) -> String {
    email.trim_matches(is_email_whitespace).to_lowercase()
}

/// Checks the `local@domain.tld` shape.
/// Rules:
/// - exactly one `@`, with at least one character on each side
/// - no whitespace anywhere
/// - the domain contains a `.` with at least one character before and after it
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_email_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot that is neither the first nor the last character of the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
