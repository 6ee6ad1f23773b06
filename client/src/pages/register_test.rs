use super::*;

#[test]
fn normalize_full_name_trims_whitespace() {
    assert_eq!(normalize_full_name("  Ana Pérez "), Some("Ana Pérez".to_owned()));
}

#[test]
fn normalize_full_name_blank_is_none() {
    assert_eq!(normalize_full_name(""), None);
    assert_eq!(normalize_full_name("   "), None);
}
