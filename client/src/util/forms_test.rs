use super::*;

// =============================================================================
// validate_email
// =============================================================================

#[test]
fn accepts_ordinary_addresses() {
    for email in ["ana@example.com", "  ana.maria+habitos@correo.es  ", "a@b.co"] {
        assert_eq!(validate_email(email), Ok(()), "{email}");
    }
}

#[test]
fn blank_email_is_required_error() {
    assert_eq!(validate_email("   "), Err(FormError::EmailRequired));
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["ana", "@example.com", "ana@", "ana@example", "ana@.com", "ana@example.", "ana@ex..com", "an a@example.com", "a@b@c.com"] {
        assert_eq!(validate_email(email), Err(FormError::EmailInvalid), "{email}");
    }
}

// =============================================================================
// login / registration / reset
// =============================================================================

#[test]
fn login_requires_password() {
    assert_eq!(validate_login("ana@example.com", ""), Err(FormError::PasswordRequired));
    assert_eq!(validate_login("ana@example.com", "x"), Ok(()));
}

#[test]
fn login_reports_email_first() {
    assert_eq!(validate_login("", ""), Err(FormError::EmailRequired));
}

#[test]
fn registration_enforces_minimum_length() {
    assert_eq!(validate_registration("ana@example.com", "12345", "12345"), Err(FormError::PasswordTooShort));
    assert_eq!(validate_registration("ana@example.com", "123456", "123456"), Ok(()));
}

#[test]
fn minimum_length_counts_characters_not_bytes() {
    assert_eq!(validate_new_password("ñññññ", "ñññññ"), Err(FormError::PasswordTooShort));
    assert_eq!(validate_new_password("ññññññ", "ññññññ"), Ok(()));
}

#[test]
fn registration_requires_matching_confirmation() {
    assert_eq!(validate_registration("ana@example.com", "secreto1", "secreto2"), Err(FormError::PasswordMismatch));
}

#[test]
fn every_form_error_has_a_message() {
    let errors = [
        FormError::EmailRequired,
        FormError::EmailInvalid,
        FormError::PasswordRequired,
        FormError::PasswordTooShort,
        FormError::PasswordMismatch,
    ];
    for err in errors {
        assert!(Msg::ALL.contains(&err.msg()));
    }
}

// =============================================================================
// auth_error_msg
// =============================================================================

#[test]
fn rejected_requests_use_caller_message() {
    let err = AuthError::Status { status: 400, message: "Invalid login credentials".into() };
    assert_eq!(auth_error_msg(&err, Msg::ErrInvalidCredentials), Msg::ErrInvalidCredentials);
}

#[test]
fn outages_and_rate_limits_are_service_errors() {
    let cases = [
        AuthError::Network("offline".into()),
        AuthError::Parse("eof".into()),
        AuthError::Status { status: 502, message: "auth service unavailable".into() },
        AuthError::Status { status: 429, message: "slow down".into() },
    ];
    for err in cases {
        assert_eq!(auth_error_msg(&err, Msg::ErrInvalidCredentials), Msg::ErrService, "{err}");
    }
}

// =============================================================================
// parse_recovery_fragment
// =============================================================================

#[test]
fn recovery_fragment_yields_token() {
    let fragment = "#access_token=eyJhbGciOi.abc&expires_in=3600&refresh_token=r1&token_type=bearer&type=recovery";
    assert_eq!(parse_recovery_fragment(fragment), RecoveryLink::Token("eyJhbGciOi.abc".to_owned()));
}

#[test]
fn fragment_without_hash_is_accepted() {
    assert_eq!(parse_recovery_fragment("access_token=t1"), RecoveryLink::Token("t1".to_owned()));
}

#[test]
fn empty_fragment_is_missing() {
    assert_eq!(parse_recovery_fragment(""), RecoveryLink::Missing);
    assert_eq!(parse_recovery_fragment("#"), RecoveryLink::Missing);
    assert_eq!(parse_recovery_fragment("#foo=bar"), RecoveryLink::Missing);
}

#[test]
fn error_fragment_is_invalid() {
    let fragment = "#error=access_denied&error_code=otp_expired&error_description=Email+link+is+invalid+or+has+expired";
    assert_eq!(parse_recovery_fragment(fragment), RecoveryLink::Invalid);
}

#[test]
fn non_recovery_link_is_invalid() {
    assert_eq!(parse_recovery_fragment("#access_token=t1&type=signup"), RecoveryLink::Invalid);
    assert_eq!(parse_recovery_fragment("#access_token=&type=recovery"), RecoveryLink::Invalid);
}
