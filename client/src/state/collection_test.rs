use futures::executor::block_on;
use records::AdShowFields;

use super::*;
use crate::net::api::RecordApi;
use crate::net::fake::FakeApi;

fn show(id: &str, name: &str) -> Record<AdShowFields> {
    Record::new(id, AdShowFields { name: name.into() })
}

#[test]
fn defaults_to_expanded_and_loading_before_the_first_fetch() {
    let state = CollectionState::<AdShowFields>::default();
    assert!(state.expanded);
    assert!(state.loading);
    assert!(!state.is_empty());
}

#[test]
fn empty_only_after_a_fetch_settles() {
    let mut state = CollectionState::<AdShowFields>::default();
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Ok(Vec::new())));
    assert!(state.is_empty());
}

#[test]
fn successful_load_replaces_items() {
    let api = FakeApi::new(vec![show("as1", "Homepage"), show("as2", "Sidebar")]);
    let mut state = CollectionState::default();
    state.items = vec![show("old", "Gone")];

    let ticket = state.begin_load();
    assert!(state.loading);
    assert!(state.finish_load(ticket, block_on(api.list())));

    assert!(!state.loading);
    let names: Vec<&str> = state.items.iter().map(|r| r.fields.name.as_str()).collect();
    assert_eq!(names, vec!["Homepage", "Sidebar"]);
}

#[test]
fn failed_load_sets_the_kind_message() {
    let api = FakeApi::<AdShowFields>::new(Vec::new());
    api.fail_next(ApiError::Network("offline".into()));
    let mut state = CollectionState::default();

    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, block_on(api.list())));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load ad show options."));
    assert!(!state.is_empty());
}

#[test]
fn stale_completion_is_dropped() {
    let mut state = CollectionState::<AdShowFields>::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(state.finish_load(second, Ok(vec![show("as2", "Newer")])));
    assert!(!state.finish_load(first, Ok(vec![show("as1", "Older")])));
    assert_eq!(state.items, vec![show("as2", "Newer")]);
}

#[test]
fn stale_completion_does_not_clear_loading() {
    let mut state = CollectionState::<AdShowFields>::default();
    let first = state.begin_load();
    let _second = state.begin_load();
    assert!(!state.finish_load(first, Ok(Vec::new())));
    assert!(state.loading);
}

#[test]
fn toggle_and_remove() {
    let mut state = CollectionState::default();
    state.items = vec![show("as1", "A"), show("as2", "B")];
    state.toggle_expanded();
    assert!(!state.expanded);
    state.remove_item(&RecordId::from("as1"));
    assert_eq!(state.items, vec![show("as2", "B")]);
}

// =============================================================
// Delete outcomes
// =============================================================

mod deletes {
    use futures::executor::block_on;
    use records::{CategoryFields, Record, RecordId};

    use crate::net::api::{ApiError, RecordApi};
    use crate::net::fake::{Call, FakeApi};
    use crate::state::collection::CollectionState;

    fn category(id: &str, name: &str) -> Record<CategoryFields> {
        Record::new(id, CategoryFields { name: name.into(), parent_name: Some("Parent".into()) })
    }

    fn loaded(api: &FakeApi<CategoryFields>) -> CollectionState<CategoryFields> {
        let mut state = CollectionState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, block_on(api.list()));
        state
    }

    #[test]
    fn declined_delete_keeps_the_list_and_alerts() {
        let api = FakeApi::new(vec![category("cat1", "Phones"), category("cat2", "Laptops")]);
        api.decline("cat1");
        let mut state = loaded(&api);

        let id = RecordId::from("cat1");
        let notice = state.apply_delete(&id, block_on(api.delete(&id)));
        assert_eq!(notice.as_deref(), Some("Could not delete the category"));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error, None);
        assert_eq!(api.calls(), vec![Call::List, Call::Delete(id)]);
    }

    #[test]
    fn deleted_row_leaves_the_list() {
        let api = FakeApi::new(vec![category("cat1", "Phones"), category("cat2", "Laptops")]);
        let mut state = loaded(&api);

        let id = RecordId::from("cat2");
        assert_eq!(state.apply_delete(&id, block_on(api.delete(&id))), None);
        assert_eq!(state.items, vec![category("cat1", "Phones")]);
    }

    #[test]
    fn failed_delete_alerts_with_message() {
        let api = FakeApi::new(vec![category("cat2", "Laptops")]);
        let mut state = loaded(&api);
        api.fail_next(ApiError::Network("offline".into()));

        let id = RecordId::from("cat2");
        let notice = state.apply_delete(&id, block_on(api.delete(&id)));
        assert_eq!(notice.as_deref(), Some("Error deleting category: network error: offline"));
        assert_eq!(state.items.len(), 1);
    }
}
