use super::*;

fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        title: "New application".to_owned(),
        content: "A band applied to your gig".to_owned(),
        kind: "application".to_owned(),
        link: None,
        is_read,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn state() -> NotificationsState {
    NotificationsState {
        items: vec![notification("n1", false), notification("n2", true), notification("n3", false)],
        ..NotificationsState::default()
    }
}

#[test]
fn unread_count_ignores_read_items() {
    assert_eq!(state().unread_count(), 2);
    assert_eq!(state().unread_ids(), vec!["n1".to_owned(), "n3".to_owned()]);
}

#[test]
fn mark_read_flips_only_the_target() {
    let mut s = state();
    assert!(s.mark_read("n1"));
    assert_eq!(s.unread_ids(), vec!["n3".to_owned()]);
}

#[test]
fn mark_read_reports_no_change_for_read_or_unknown_ids() {
    let mut s = state();
    assert!(!s.mark_read("n2"));
    assert!(!s.mark_read("missing"));
    assert_eq!(s.unread_count(), 2);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut s = state();
    s.mark_all_read();
    assert_eq!(s.unread_count(), 0);
    assert_eq!(badge_label(s.unread_count()), None);
}

#[test]
fn badge_label_caps_large_counts() {
    assert_eq!(badge_label(3).as_deref(), Some("3"));
    assert_eq!(badge_label(9).as_deref(), Some("9"));
    assert_eq!(badge_label(42).as_deref(), Some("9+"));
}
