//! Color sanitizing for payload-provided sender/recipient colors.
//!
//! Colors arrive from the server as free-form strings and end up inside a
//! `style` attribute, so only `#RGB` / `#RRGGBB` survive; anything else is
//! replaced with [`DEFAULT_NAME_COLOR`].

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Neutral text color used when a payload color is unusable.
pub const DEFAULT_NAME_COLOR: &str = "#2f4f4f";

/// Canonical lowercase `#rrggbb` form of `value`, or the default color.
pub fn name_color(value: &str) -> String {
    let Some(hex) = value.trim().strip_prefix('#') else {
        return DEFAULT_NAME_COLOR.to_owned();
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return DEFAULT_NAME_COLOR.to_owned();
    }
    let digits: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_owned(),
        _ => return DEFAULT_NAME_COLOR.to_owned(),
    };
    format!("#{}", digits.to_ascii_lowercase())
}
