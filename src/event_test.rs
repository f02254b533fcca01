use super::*;

#[test]
fn scrolled_helper_has_no_sections() {
    assert_eq!(UiEvent::scrolled(42.0), UiEvent::Scrolled { offset_y: 42.0, sections: Vec::new() });
}

#[test]
fn effect_set_builds_set_class() {
    let effect = Effect::set(Target::Header, ClassKind::Sticky, true);
    assert_eq!(effect, Effect::SetClass { target: Target::Header, class: ClassKind::Sticky, present: true });
}

#[test]
fn effect_target_reports_element() {
    assert_eq!(Effect::set(Target::NavLink(3), ClassKind::Active, false).target(), Target::NavLink(3));
}

#[test]
fn nav_links_compare_by_index() {
    assert_eq!(Target::NavLink(1), Target::NavLink(1));
    assert_ne!(Target::NavLink(1), Target::NavLink(2));
}
