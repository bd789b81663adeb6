use shub_domain::constants::MAX_USERNAME_LEN;
use std::borrow::Cow;

#[shub_derive::shub_error]
pub enum GuardError {
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Normalizes user handles before they reach a post source.
#[derive(Debug)]
pub struct UsernameGuard;

impl UsernameGuard {
    /// Trims the handle and strips leading `@`, then checks the platform's handle rules:
    /// 1 to 15 characters from `[A-Za-z0-9_]`.
    ///
    /// # Errors
    /// Returns [`GuardError::Validation`] for empty, too long or malformed handles.
    pub fn normalize(raw: impl AsRef<str>) -> Result<String, GuardError> {
        let name = raw.as_ref().trim().trim_start_matches('@');

        if name.is_empty() {
            return Err(GuardError::Validation {
                message: "Please enter a username".into(),
                context: None,
            });
        }

        if name.len() > MAX_USERNAME_LEN {
            return Err(GuardError::Validation {
                message: format!("'{name}' is longer than {MAX_USERNAME_LEN} characters").into(),
                context: Some("Username".into()),
            });
        }

        if let Some(bad) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(GuardError::Validation {
                message: format!("'{name}' contains the invalid character '{bad}'").into(),
                context: Some("Username".into()),
            });
        }

        Ok(name.to_owned())
    }
}
