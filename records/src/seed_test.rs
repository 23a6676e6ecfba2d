use std::collections::HashSet;

use super::*;

#[test]
fn ids_are_unique_within_each_kind() {
    let records = default_records();
    let mut seen = HashSet::new();
    for record in &records {
        assert!(seen.insert((record.kind(), record.id().clone())), "duplicate {:?}", record.id());
    }
}

#[test]
fn every_kind_is_seeded() {
    let records = default_records();
    for kind in EntityKind::ALL {
        assert!(records.iter().any(|r| r.kind() == kind), "{kind} has no seed");
    }
}

#[test]
fn seeded_records_pass_validation() {
    for record in default_records() {
        let result = match &record {
            AnyRecord::AdType(r) => r.fields.validate(),
            AnyRecord::PromotionPower(r) => r.fields.validate(),
            AnyRecord::Duration(r) => r.fields.validate(),
            AnyRecord::AdShow(r) => r.fields.validate(),
            AnyRecord::Category(r) => r.fields.validate(),
            AnyRecord::User(r) => r.fields.validate(),
            AnyRecord::Email(r) => r.fields.validate(),
        };
        assert!(result.is_ok(), "{record:?}");
    }
}

#[test]
fn health_category_is_locked() {
    assert!(is_locked(EntityKind::Category, "cat1"));
    assert!(!is_locked(EntityKind::Category, "cat2"));
    assert!(!is_locked(EntityKind::AdType, "cat1"));
}

#[test]
fn durations_seed_seven_fourteen_thirty() {
    let days: Vec<u32> = default_records()
        .iter()
        .filter_map(|r| DurationFields::unwrap_any(r).map(|d| d.fields.value_days))
        .collect();
    assert_eq!(days, vec![7, 14, 30]);
}

#[test]
fn email_lists_split_by_audience() {
    let emails: Vec<_> = default_records()
        .iter()
        .filter_map(|r| EmailFields::unwrap_any(r).map(|e| e.fields.audience))
        .collect();
    assert_eq!(emails.iter().filter(|a| **a == Audience::Registered).count(), 5);
    assert_eq!(emails.iter().filter(|a| **a == Audience::Newsletter).count(), 4);
}
