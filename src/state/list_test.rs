use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: i64,
    organ: String,
    reason: Option<String>,
}

impl Searchable for Row {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.organ.clone(), self.id.to_string()];
        if let Some(reason) = &self.reason {
            fields.push(reason.clone());
        }
        fields
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 1, organ: "Kidney".to_owned(), reason: Some("accident".to_owned()) },
        Row { id: 2, organ: "Liver".to_owned(), reason: None },
        Row { id: 30, organ: "Heart".to_owned(), reason: Some("Voluntary".to_owned()) },
    ]
}

// =============================================================
// ListState lifecycle
// =============================================================

#[test]
fn list_state_default_is_loading_and_empty() {
    let state = ListState::<Row>::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_clears_error_and_raises_loading() {
    let mut state = ListState::<Row>::default();
    let epoch = state.begin();
    state.finish(epoch, Err("Failed to load donors.".to_owned()));
    assert!(state.error.is_some());

    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn successful_fetch_replaces_the_collection() {
    let mut state = ListState::<Row>::default();
    let epoch = state.begin();
    state.finish(epoch, Ok(rows()));
    assert_eq!(state.items.len(), 3);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_fetch_keeps_previous_items_and_sets_error() {
    let mut state = ListState::<Row>::default();
    let epoch = state.begin();
    state.finish(epoch, Ok(rows()));

    let epoch = state.begin();
    state.finish(epoch, Err("Failed to load donors.".to_owned()));
    assert_eq!(state.items, rows());
    assert_eq!(state.error.as_deref(), Some("Failed to load donors."));
    assert!(!state.loading);
}

#[test]
fn stale_epoch_result_is_discarded() {
    let mut state = ListState::<Row>::default();
    let first = state.begin();
    let second = state.begin();

    // The superseded fetch resolves last-in-first: its result must not land.
    state.finish(first, Ok(rows()));
    assert!(state.items.is_empty());
    assert!(state.loading);

    state.finish(second, Ok(rows()));
    assert_eq!(state.items.len(), 3);
    assert!(!state.loading);
}

#[test]
fn results_after_teardown_are_discarded() {
    let mut state = ListState::<Row>::default();
    let epoch = state.begin();
    state.deactivate();
    state.finish(epoch, Ok(rows()));
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn refetch_after_delete_reflects_backend_state() {
    let mut state = ListState::<Row>::default();
    let epoch = state.begin();
    state.finish(epoch, Ok(rows()));

    // Backend deleted id 2; the mandatory refetch resyncs the view.
    let remaining: Vec<Row> = rows().into_iter().filter(|r| r.id != 2).collect();
    let epoch = state.begin();
    state.finish(epoch, Ok(remaining.clone()));
    assert_eq!(state.items, remaining);
    assert!(!state.items.iter().any(|r| r.id == 2));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_query_returns_the_full_collection() {
    let items = rows();
    assert_eq!(filter_items(&items, "").len(), 3);
    assert_eq!(filter_items(&items, "   ").len(), 3);
}

#[test]
fn filter_matches_are_case_insensitive_substrings() {
    let items = rows();
    let hits = filter_items(&items, "kid");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].organ, "Kidney");

    let hits = filter_items(&items, "VOLUNT");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 30);
}

#[test]
fn excluded_records_contain_the_query_in_no_designated_field() {
    let items = rows();
    let needle = "liver";
    let hits = filter_items(&items, needle);
    for item in &items {
        let contains = item
            .search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(needle));
        let kept = hits.iter().any(|h| h.id == item.id);
        assert_eq!(contains, kept);
    }
}

#[test]
fn numeric_fields_filter_via_their_decimal_form() {
    let items = rows();
    let hits = filter_items(&items, "30");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].organ, "Heart");
}

#[test]
fn unmatched_query_returns_nothing() {
    let items = rows();
    assert!(filter_items(&items, "pancreas").is_empty());
}
