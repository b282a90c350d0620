use super::*;

#[test]
fn click_inside_container_keeps_popup_open() {
    assert!(is_inside_popup(["recipient-checkbox", "", "picker popup-container", "page"]));
}

#[test]
fn click_outside_closes_popup() {
    assert!(!is_inside_popup(["message", "messages", "page"]));
    assert!(!is_inside_popup(std::iter::empty()));
}

#[test]
fn class_match_is_whole_token() {
    assert!(!is_inside_popup(["popup-container-ish"]));
    assert!(is_inside_popup(["  popup-container  "]));
}

#[test]
fn outside_click_closes_open_popup() {
    let owner = Owner::new();
    owner.with(|| {
        let open = RwSignal::new(true);
        assert!(close_on_outside_click(open, ["message", "page"]));
        assert!(!open.get_untracked());
    });
}

#[test]
fn inside_click_leaves_popup_open() {
    let owner = Owner::new();
    owner.with(|| {
        let open = RwSignal::new(true);
        assert!(!close_on_outside_click(open, ["recipient-checkbox", "popup-container"]));
        assert!(open.get_untracked());
    });
}

#[test]
fn click_after_picker_unmount_is_ignored() {
    let owner = Owner::new();
    let open = owner.with(|| RwSignal::new(true));
    owner.cleanup();
    assert!(!close_on_outside_click(open, ["page"]));
}
