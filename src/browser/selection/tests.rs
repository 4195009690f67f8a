use super::*;

fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<RecordId> {
    range.map(|i| i.to_string()).collect()
}

#[test]
fn select_all_then_all_selected() {
    let page = ids(1..=10);
    let mut selection = Selection::default();

    selection.select_all(true, &page);
    assert!(selection.is_all_selected(page.len()));
    assert_eq!(selection.len(), 10);
}

#[test]
fn deselect_all_only_matches_empty_page() {
    let page = ids(1..=10);
    let mut selection = Selection::default();
    selection.select_all(true, &page);

    selection.select_all(false, &page);
    assert!(selection.is_empty());
    assert!(!selection.is_all_selected(page.len()));
    assert!(selection.is_all_selected(0));
}

#[test]
fn select_all_discards_other_pages() {
    let mut selection = Selection::default();
    selection.toggle_one("55", true);

    let page = ids(1..=10);
    selection.select_all(true, &page);

    assert!(!selection.is_selected("55"));
    assert_eq!(selection.len(), 10);
}

#[test]
fn toggle_one_is_page_independent() {
    let mut selection = Selection::default();
    selection.toggle_one("3", true);
    selection.toggle_one("42", true);
    selection.toggle_one("3", true);

    assert_eq!(selection.len(), 2);
    assert!(selection.is_selected("42"));

    selection.toggle_one("3", false);
    selection.toggle_one("missing", false);
    assert_eq!(selection.to_vec(), vec!["42".to_string()]);
}

#[test]
fn all_selected_uses_count_not_identity() {
    let mut selection = Selection::default();
    for id in ids(11..=20) {
        selection.toggle_one(&id, true);
    }

    // ten ids from page two satisfy the header check on page one
    assert!(selection.is_all_selected(10));
}

#[test]
fn remove_all_drops_deleted_ids() {
    let mut selection = Selection::default();
    selection.select_all(true, &ids(1..=5));
    selection.remove_all(&ids(2..=3));

    assert_eq!(selection.to_vec(), vec!["1", "4", "5"]);
}
