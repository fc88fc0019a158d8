use super::*;

#[test]
fn loader_display_follows_busy_flag() {
    assert_eq!(loader_display(true), "flex");
    assert_eq!(loader_display(false), "none");
}

#[test]
fn section_class_marks_active_section() {
    assert_eq!(section_class(true), "content-section active");
    assert_eq!(section_class(false), "content-section");
}
