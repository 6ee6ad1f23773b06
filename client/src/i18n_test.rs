use super::*;

#[test]
fn every_message_has_both_translations() {
    for msg in Msg::ALL {
        for locale in [Locale::Es, Locale::En] {
            let text = msg.text(locale);
            assert!(!text.trim().is_empty(), "{msg:?} missing in {locale:?}");
        }
    }
}

#[test]
fn catalog_lists_each_variant_once() {
    for (i, a) in Msg::ALL.iter().enumerate() {
        assert!(!Msg::ALL[i + 1..].contains(a), "{a:?} listed twice");
    }
}

#[test]
fn spanish_is_the_default_language() {
    assert_eq!(Msg::NavLogin.text(Locale::default()), "Iniciar sesión");
}

#[test]
fn language_name_names_the_target_language() {
    // The toggle shows the language it switches to.
    assert_eq!(Msg::LanguageName.text(Locale::Es.toggled()), "English");
    assert_eq!(Msg::LanguageName.text(Locale::En.toggled()), "Español");
}

#[test]
fn password_length_message_matches_minimum() {
    let min = access::MIN_PASSWORD_LEN.to_string();
    assert!(Msg::ErrPasswordShort.text(Locale::Es).contains(&min));
    assert!(Msg::ErrPasswordShort.text(Locale::En).contains(&min));
}
