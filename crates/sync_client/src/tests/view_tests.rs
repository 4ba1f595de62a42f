use super::*;
use shared::domain::GuestId;

fn guest(id: &str, first_name: &str, last_name: &str, email: &str) -> GuestRecord {
    GuestRecord {
        id: GuestId::new(id),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        phone: String::new(),
        address: String::new(),
        date_of_birth: None,
    }
}

fn sample() -> Vec<GuestRecord> {
    vec![
        guest("g-1", "Jane", "Doe", "jane@x.com"),
        guest("g-2", "Ádám", "Barta", "adam@y.com"),
        guest("g-3", "john", "roe", "JOHN@z.com"),
    ]
}

#[test]
fn empty_search_term_matches_everything() {
    let records = sample();
    let visible = filter_and_sort(&records, "", SortKey::Name);
    assert_eq!(visible.len(), records.len());
}

#[test]
fn search_matches_full_name_across_the_space() {
    let visible = filter_and_sort(&sample(), "ne do", SortKey::Name);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, GuestId::new("g-1"));
}

#[test]
fn search_is_case_insensitive_on_name_and_email() {
    let visible = filter_and_sort(&sample(), "JANE", SortKey::Name);
    assert_eq!(visible.len(), 1);

    let visible = filter_and_sort(&sample(), "john@", SortKey::Name);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, GuestId::new("g-3"));
}

#[test]
fn search_that_matches_nothing_yields_an_empty_view() {
    assert!(filter_and_sort(&sample(), "zzz", SortKey::Name).is_empty());
}

#[test]
fn sort_by_name_ignores_case() {
    let visible = filter_and_sort(&sample(), "", SortKey::Name);
    let names: Vec<String> = visible.iter().map(GuestRecord::full_name).collect();
    assert_eq!(names, vec!["Ádám Barta", "Jane Doe", "john roe"]);
}

#[test]
fn accented_names_sort_with_their_base_letter() {
    let records = vec![
        guest("g-1", "Zoe", "Quinn", "zoe@x.com"),
        guest("g-2", "Ádám", "Barta", "adam@y.com"),
        guest("g-3", "Émile", "Zola", "emile@z.com"),
    ];
    let visible = filter_and_sort(&records, "", SortKey::Name);
    let names: Vec<String> = visible.iter().map(GuestRecord::full_name).collect();
    assert_eq!(names, vec!["Ádám Barta", "Émile Zola", "Zoe Quinn"]);
}

#[test]
fn sort_by_email_ignores_case() {
    let visible = filter_and_sort(&sample(), "", SortKey::Email);
    let emails: Vec<&str> = visible.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails, vec!["adam@y.com", "jane@x.com", "JOHN@z.com"]);
}

#[test]
fn sorting_an_already_sorted_set_is_a_no_op() {
    let once = filter_and_sort(&sample(), "", SortKey::Email);
    let twice = filter_and_sort(&once, "", SortKey::Email);
    assert_eq!(once, twice);
}

#[test]
fn list_view_reflects_search_and_sort_changes() {
    let mut view = GuestListView::new(SortKey::Name);
    view.set_records(sample());
    assert_eq!(view.visible().len(), 3);

    view.set_search_term("x.com");
    let ids: Vec<GuestId> = view.visible().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![GuestId::new("g-1")]);

    view.set_search_term("");
    view.set_sort_key(SortKey::Email);
    assert_eq!(view.visible()[0].email, "adam@y.com");

    view.set_records(Vec::new());
    assert!(view.visible().is_empty());
}
