use super::*;

fn complete_form() -> GigForm {
    GigForm {
        title: " Friday Jazz Night ".into(),
        description: "Two sets, house backline.".into(),
        genre: "jazz".into(),
        date: "2026-11-06".into(),
        time: "20:00".into(),
        pay: "$300".into(),
        tags: "jazz, live, ".into(),
    }
}

#[test]
fn validate_gig_form_builds_trimmed_post() {
    let gig = validate_gig_form(&complete_form()).unwrap();
    assert_eq!(gig.title, "Friday Jazz Night");
    assert_eq!(gig.tags, vec!["jazz".to_owned(), "live".to_owned()]);
    assert_eq!(gig.photo_url, None);
}

#[test]
fn validate_gig_form_reports_first_missing_field() {
    let form = GigForm { title: "  ".into(), pay: String::new(), ..complete_form() };
    assert_eq!(validate_gig_form(&form), Err("Title is required"));

    let form = GigForm { pay: String::new(), ..complete_form() };
    assert_eq!(validate_gig_form(&form), Err("Pay info is required"));
}

#[test]
fn validate_gig_form_allows_empty_description_and_tags() {
    let form = GigForm { description: String::new(), tags: String::new(), ..complete_form() };
    let gig = validate_gig_form(&form).unwrap();
    assert!(gig.description.is_empty());
    assert!(gig.tags.is_empty());
}
