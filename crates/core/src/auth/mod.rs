//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Shape checks for registration and login payloads

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use salesbook_shared::FieldError;
use salesbook_shared::auth::{LoginRequest, RegisterRequest};

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Shortest accepted display name.
pub const MIN_NAME_LEN: usize = 2;

/// Longest accepted email or display name, in characters.
pub const MAX_FIELD_LEN: usize = 255;

/// Checks a registration payload, collecting every rejected field.
///
/// # Errors
///
/// Returns the list of offending fields when any rule is violated.
pub fn validate_registration(req: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_valid_email(&req.email) || req.email.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError::new("email", "Email inválido"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Senha deve ter no mínimo 6 caracteres",
        ));
    }
    let name_len = req.name.trim().chars().count();
    if name_len < MIN_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            "Nome deve ter no mínimo 2 caracteres",
        ));
    } else if req.name.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            "name",
            "Nome deve ter no máximo 255 caracteres",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Checks a login payload, collecting every rejected field.
///
/// # Errors
///
/// Returns the list of offending fields when any rule is violated.
pub fn validate_login(req: &LoginRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_valid_email(&req.email) {
        errors.push(FieldError::new("email", "Email inválido"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Senha é obrigatória"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Loose address check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}
