use super::*;

fn application(id: &str, status: ApplicationStatus) -> Application {
    Application {
        id: id.into(),
        gig_id: "g1".into(),
        applicant_id: "u2".into(),
        venue_id: "v1".into(),
        applicant_name: "The Hollows".into(),
        applicant_avatar: None,
        message: None,
        status,
        created_at: "2026-10-01T12:00:00Z".into(),
        gig_title: Some("Friday Jazz Night".into()),
        gig_date: None,
        venue_name: None,
    }
}

#[test]
fn replace_application_swaps_matching_item_in_place() {
    let mut items = vec![application("a1", ApplicationStatus::Pending), application("a2", ApplicationStatus::Pending)];

    assert!(replace_application(&mut items, application("a2", ApplicationStatus::Accepted)));
    assert_eq!(items[0].status, ApplicationStatus::Pending);
    assert_eq!(items[1].status, ApplicationStatus::Accepted);
}

#[test]
fn replace_application_ignores_unlisted_ids() {
    let mut items = vec![application("a1", ApplicationStatus::Pending)];

    assert!(!replace_application(&mut items, application("a9", ApplicationStatus::Declined)));
    assert_eq!(items, vec![application("a1", ApplicationStatus::Pending)]);
}

#[test]
fn applications_state_starts_idle() {
    let state = ApplicationsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
}
