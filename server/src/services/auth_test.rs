use super::*;

fn user() -> SessionUser {
    SessionUser { id: "u-1".to_owned(), email: Some("ana@example.com".to_owned()), full_name: None }
}

fn grant(expires_in: Option<i64>, expires_at: Option<i64>) -> TokenGrant {
    TokenGrant {
        access_token: "access".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_in,
        expires_at,
        user: user(),
    }
}

#[test]
fn session_carries_user_without_tokens() {
    let session = grant(None, Some(1_900_000_000)).session();
    assert_eq!(session.user, user());
    let json = serde_json::to_string(&session).expect("serialize");
    assert!(!json.contains("access"));
    assert!(!json.contains("refresh"));
}

#[test]
fn session_prefers_absolute_expiry() {
    let session = grant(Some(60), Some(1_900_000_000)).session();
    assert_eq!(session.expires_at, Some(1_900_000_000));
}

#[test]
fn session_derives_expiry_from_lifetime() {
    let before = time::OffsetDateTime::now_utc().unix_timestamp();
    let session = grant(Some(3600), None).session();
    let expires_at = session.expires_at.expect("derived expiry");
    assert!(expires_at >= before + 3600);
    assert!(expires_at <= before + 3600 + 5);
}

#[test]
fn session_without_expiry_information() {
    assert_eq!(grant(None, None).session().expires_at, None);
}
