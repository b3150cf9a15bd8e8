use super::*;

#[test]
fn status_label_and_class_match_status() {
    assert_eq!(status_label(ApplicationStatus::Pending), "Pending");
    assert_eq!(status_class(ApplicationStatus::Declined), "status-badge status-badge--declined");
}

#[test]
fn short_date_keeps_only_the_date() {
    assert_eq!(short_date("2026-03-14T20:30:00Z"), "2026-03-14");
    assert_eq!(short_date("tomorrow"), "tomorrow");
}

#[test]
fn short_time_reads_hours_and_minutes() {
    assert_eq!(short_time("2026-11-06T20:00:00"), Some("20:00"));
    assert_eq!(short_time("2026-11-06"), None);
    assert_eq!(short_time("2026-11-06T8pm"), None);
}

#[test]
fn parse_tags_trims_and_drops_empties() {
    assert_eq!(parse_tags(" jazz, ,live music,"), vec!["jazz".to_owned(), "live music".to_owned()]);
    assert!(parse_tags("   ").is_empty());
}
