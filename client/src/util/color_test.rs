use super::*;

#[test]
fn short_form_expands() {
    assert_eq!(name_color("#ABC"), "#aabbcc");
    assert_eq!(name_color("#111"), "#111111");
}

#[test]
fn long_form_is_trimmed_and_lowercased() {
    assert_eq!(name_color("  #A1B2c3 "), "#a1b2c3");
}

#[test]
fn malformed_values_fall_back() {
    for raw in ["", "AABBCC", "#12", "#12GG34", "#ЖЖЖ", "#aabbccdd", "red"] {
        assert_eq!(name_color(raw), DEFAULT_NAME_COLOR, "{raw:?}");
    }
}

#[test]
fn style_injection_is_rejected() {
    assert_eq!(name_color("red; background: url(x)"), DEFAULT_NAME_COLOR);
    assert_eq!(name_color("#fff; color: red"), DEFAULT_NAME_COLOR);
}
