use super::*;

#[test]
fn severity_class_maps_levels() {
    assert_eq!(severity_class("critical"), "badge badge--critical");
    assert_eq!(severity_class("high"), "badge badge--high");
    assert_eq!(severity_class("warning"), "badge badge--warning");
}

#[test]
fn severity_class_defaults_to_info() {
    assert_eq!(severity_class("info"), "badge badge--info");
    assert_eq!(severity_class("unknown"), "badge badge--info");
}

#[test]
fn alert_card_class_borders_by_severity() {
    assert_eq!(alert_card_class("critical"), "card alert-card alert-card--critical");
    assert_eq!(alert_card_class("warning"), "card alert-card alert-card--warning");
    assert_eq!(alert_card_class("high"), "card alert-card alert-card--info");
}

#[test]
fn resolve_notes_match_backend_convention() {
    assert_eq!(RESOLVE_NOTES, "Resuelto");
}
