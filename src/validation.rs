//! Field validation rules for the user-creation form.
//!
//! All rules run locally before submission; a draft that fails any rule
//! never reaches the network.

/// Minimum username length in characters.
pub const USERNAME_MIN_CHARS: usize = 3;

/// Minimum password length in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Per-field validation messages for the user-creation draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirmation: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirmation.is_none()
    }
}

pub fn validate_username(username: &str) -> Option<String> {
    if username.chars().count() < USERNAME_MIN_CHARS {
        Some(format!("Username must be at least {USERNAME_MIN_CHARS} characters"))
    } else {
        None
    }
}

/// Address-shape check: one `@` with a non-empty local part and a domain
/// containing a dot with non-empty labels. Deliberately not RFC-complete;
/// the backend has the final word.
pub fn validate_email(email: &str) -> Option<String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        None
    } else {
        Some("Invalid email address".to_string())
    }
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        Some(format!("Password must be at least {PASSWORD_MIN_CHARS} characters"))
    } else {
        None
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<String> {
    if password != confirmation {
        Some("Passwords don't match".to_string())
    } else {
        None
    }
}

/// Run every rule over a draft, collecting field-level messages.
pub fn validate_form(
    username: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> FieldErrors {
    FieldErrors {
        username: validate_username(username),
        email: validate_email(email),
        password: validate_password(password),
        confirmation: validate_confirmation(password, confirmation),
    }
}
