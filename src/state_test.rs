use super::*;

fn data(name: &str) -> serde_json::Value {
    serde_json::json!({ "name": name })
}

#[test]
fn push_assigns_increasing_positions() {
    let mut collection = Collection::default();
    collection.push(RecordId::from("a"), data("A"), false);
    collection.push(RecordId::from("b"), data("B"), false);
    let positions: Vec<i64> = collection.records.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[test]
fn restore_keeps_position_order_and_advances_counter() {
    let mut collection = Collection::default();
    for (id, position) in [("c", 7), ("a", 2), ("b", 5)] {
        collection.restore(StoredRecord {
            id: RecordId::from(id),
            position,
            locked: false,
            data: data(id),
            revision: 1,
        });
    }
    let ids: Vec<&str> = collection.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(collection.push(RecordId::from("d"), data("D"), false).position, 8);
}

#[test]
fn remove_returns_the_record_once() {
    let mut collection = Collection::default();
    collection.push(RecordId::from("a"), data("A"), false);
    assert!(collection.remove(&RecordId::from("a")).is_some());
    assert!(collection.remove(&RecordId::from("a")).is_none());
    assert!(collection.records.is_empty());
}

#[test]
fn to_wire_puts_id_alongside_fields() {
    let record = StoredRecord {
        id: RecordId::from("cat1"),
        position: 0,
        locked: true,
        data: serde_json::json!({ "name": "Health", "parentName": "Parent", "id": "stale" }),
        revision: 3,
    };
    assert_eq!(record.to_wire(), serde_json::json!({ "id": "cat1", "name": "Health", "parentName": "Parent" }));
}

#[test]
fn catalog_empty_until_a_record_exists() {
    let mut catalog = CatalogState::new();
    assert!(catalog.is_empty());
    catalog.collection_mut(EntityKind::Email);
    assert!(catalog.is_empty());
    catalog
        .collection_mut(EntityKind::Email)
        .push(RecordId::from("n1"), data("x"), false);
    assert!(!catalog.is_empty());
}

#[test]
fn mark_dirty_dedupes_keys() {
    let mut catalog = CatalogState::new();
    catalog.mark_dirty(EntityKind::AdType, RecordId::from("1"));
    catalog.mark_dirty(EntityKind::AdType, RecordId::from("1"));
    catalog.mark_dirty(EntityKind::Duration, RecordId::from("1"));
    assert_eq!(catalog.dirty.len(), 2);
}
