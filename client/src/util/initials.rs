//! Initials extraction for compact sender/recipient display.
//!
//! Only upper-case Latin (`A`-`Z`) and Cyrillic (`А`-`Я`, `Ё`) letters count
//! as initials. Everything else is skipped, so a name without any qualifying
//! character yields an empty string rather than an error.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

/// Whether `c` is an upper-case letter that contributes to initials.
pub fn is_initial_char(c: char) -> bool {
    c.is_ascii_uppercase() || ('А'..='Я').contains(&c) || c == 'Ё'
}

/// Concatenate every qualifying upper-case letter of `name`, in order.
pub fn initials(name: &str) -> String {
    name.chars().filter(|c| is_initial_char(*c)).collect()
}

/// Initials for a recipient label, or `None` when the name has none.
pub fn acronym(name: &str) -> Option<String> {
    let value = initials(name);
    if value.is_empty() { None } else { Some(value) }
}
