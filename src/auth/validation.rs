use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Première règle non respectée, vérifiées dans l'ordre de déclaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WeakPassword {
    #[error("Password must be at least 8 characters")]
    TooShort,
    #[error("Password must contain uppercase letter")]
    MissingUppercase,
    #[error("Password must contain lowercase letter")]
    MissingLowercase,
    #[error("Password must contain a number")]
    MissingDigit,
}

/// Format `local@domaine.tld`, sans espace et avec un seul `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn check_password_strength(password: &str) -> Result<(), WeakPassword> {
    // Longueur en unités UTF-16, comme côté navigateur
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(WeakPassword::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(WeakPassword::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(WeakPassword::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(WeakPassword::MissingDigit);
    }
    Ok(())
}

/// Un champ est présent seulement s'il contient une chaîne non vide
pub fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
