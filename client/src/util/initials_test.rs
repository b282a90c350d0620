use super::*;

#[test]
fn initials_takes_every_upper_case_letter() {
    assert_eq!(initials("Alice Smith"), "AS");
    assert_eq!(initials("Bob X"), "BX");
    assert_eq!(initials("McDonald"), "MD");
}

#[test]
fn initials_supports_cyrillic_names() {
    assert_eq!(initials("Иван Петров"), "ИП");
    assert_eq!(initials("Ёжик Туманов"), "ЁТ");
}

#[test]
fn initials_of_lower_case_name_is_empty() {
    assert_eq!(initials("bob"), "");
    assert_eq!(initials(""), "");
    assert_eq!(initials("42 ünïcödé"), "");
}

#[test]
fn initials_ignores_non_latin_non_cyrillic_capitals() {
    assert_eq!(initials("Ωmega Alpha"), "A");
}

#[test]
fn acronym_is_none_without_initials() {
    assert_eq!(acronym("anon"), None);
    assert_eq!(acronym("Carol Y"), Some("CY".to_owned()));
}
