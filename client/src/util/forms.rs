//! Auth form validation and recovery-link parsing.
//!
//! Validation mirrors the server's checks so most mistakes are caught before
//! a request; the server remains authoritative.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use access::MIN_PASSWORD_LEN;

use crate::i18n::Msg;
use crate::net::api::AuthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    PasswordMismatch,
}

impl FormError {
    #[must_use]
    pub fn msg(self) -> Msg {
        match self {
            Self::EmailRequired => Msg::ErrEmailRequired,
            Self::EmailInvalid => Msg::ErrEmailInvalid,
            Self::PasswordRequired => Msg::ErrPasswordRequired,
            Self::PasswordTooShort => Msg::ErrPasswordShort,
            Self::PasswordMismatch => Msg::ErrPasswordMismatch,
        }
    }
}

/// Shape check only: `local@domain.tld`, no whitespace.
///
/// # Errors
///
/// [`FormError::EmailRequired`] for blank input, [`FormError::EmailInvalid`] otherwise.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::EmailRequired);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::EmailInvalid);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(FormError::EmailInvalid);
    }
    Ok(())
}

/// # Errors
///
/// The first failing field, email before password.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    Ok(())
}

/// New password plus its confirmation.
///
/// # Errors
///
/// [`FormError::PasswordRequired`], [`FormError::PasswordTooShort`], or
/// [`FormError::PasswordMismatch`].
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), FormError> {
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

/// # Errors
///
/// The first failing field, email before password.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), FormError> {
    validate_email(email)?;
    validate_new_password(password, confirm)
}

/// Message for a failed auth call. Client-side rejections (4xx other than
/// rate limiting) show `rejected`; everything else is a service problem.
#[must_use]
pub fn auth_error_msg(err: &AuthError, rejected: Msg) -> Msg {
    match err.status() {
        Some(status) if (400..500).contains(&status) && status != 429 => rejected,
        _ => Msg::ErrService,
    }
}

// =============================================================================
// RECOVERY LINK
// =============================================================================

/// What a recovery link's URL fragment carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryLink {
    /// No fragment: the reset form falls back to the current session.
    Missing,
    /// A usable recovery access token.
    Token(String),
    /// Expired, already used, or not a recovery link.
    Invalid,
}

/// Parse `#access_token=..&type=recovery` (or `#error=..`) from a recovery link.
#[must_use]
pub fn parse_recovery_fragment(fragment: &str) -> RecoveryLink {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.trim().is_empty() {
        return RecoveryLink::Missing;
    }

    let mut token = None;
    let mut kind = None;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "error" | "error_code" => return RecoveryLink::Invalid,
            "access_token" if !value.is_empty() => token = Some(value.to_owned()),
            "type" => kind = Some(value),
            _ => {}
        }
    }

    match (token, kind) {
        (Some(token), None | Some("recovery")) => RecoveryLink::Token(token),
        (None, None) => RecoveryLink::Missing,
        _ => RecoveryLink::Invalid,
    }
}
