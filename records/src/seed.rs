//! Default collections installed into an empty store.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::entities::{
    AdShowFields, AdTypeFields, Audience, CategoryFields, DurationFields, EmailFields, Permission,
    PromotionPowerFields, UserFields,
};
use crate::kind::EntityKind;
use crate::record::{AnyRecord, Record};
use crate::schema::RecordFields;

/// Records that refuse deletion. The store answers `success: false` for them.
pub const LOCKED: &[(EntityKind, &str)] = &[(EntityKind::Category, "cat1")];

const JUL_03_2023: i64 = 1_688_342_400_000;
const JAN_29_2020: i64 = 1_580_256_000_000;
const OCT_09_2024: i64 = 1_728_432_000_000;
const SEP_26_2024: i64 = 1_727_308_800_000;

/// Whether a seeded record is locked against deletion.
#[must_use]
pub fn is_locked(kind: EntityKind, id: &str) -> bool {
    LOCKED.iter().any(|(k, i)| *k == kind && *i == id)
}

fn wrap_all<F: RecordFields>(records: Vec<Record<F>>) -> impl Iterator<Item = AnyRecord> {
    records.into_iter().map(F::wrap)
}

/// Every default record, grouped by kind in [`EntityKind::ALL`] order.
#[must_use]
pub fn default_records() -> Vec<AnyRecord> {
    wrap_all(ad_types())
        .chain(wrap_all(promotion_powers()))
        .chain(wrap_all(durations()))
        .chain(wrap_all(ad_shows()))
        .chain(wrap_all(categories()))
        .chain(wrap_all(users()))
        .chain(wrap_all(emails()))
        .collect()
}

fn ad_types() -> Vec<Record<AdTypeFields>> {
    ["Sponsored Post", "Banner Ad", "Pop-up Ad"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            Record::new(
                (i + 1).to_string(),
                AdTypeFields { name: name.to_owned(), price: 10_000, currency: "NGN".to_owned() },
            )
        })
        .collect()
}

fn promotion_powers() -> Vec<Record<PromotionPowerFields>> {
    vec![
        Record::new("1", PromotionPowerFields { name: "Standard (Basic reach)".to_owned() }),
        Record::new("2", PromotionPowerFields { name: "Premium (Wider reach)".to_owned() }),
    ]
}

fn durations() -> Vec<Record<DurationFields>> {
    [("7 Days", 7), ("14 Days", 14), ("1 Month", 30)]
        .into_iter()
        .enumerate()
        .map(|(i, (label, value_days))| {
            Record::new((i + 1).to_string(), DurationFields { label: label.to_owned(), value_days })
        })
        .collect()
}

fn ad_shows() -> Vec<Record<AdShowFields>> {
    [("as1", "Premium"), ("as2", "High Frequency Display"), ("as3", "Top Placement Priority")]
        .into_iter()
        .map(|(id, name)| Record::new(id, AdShowFields { name: name.to_owned() }))
        .collect()
}

fn categories() -> Vec<Record<CategoryFields>> {
    [
        "Health",
        "Journalism",
        "Wellness",
        "Inspiration",
        "Food & Nutrition",
        "Science & Technology",
        "Entertainment",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| {
        Record::new(
            format!("cat{}", i + 1),
            CategoryFields { name: name.to_owned(), parent_name: Some("Parent".to_owned()) },
        )
    })
    .collect()
}

fn users() -> Vec<Record<UserFields>> {
    [
        ("001", JUL_03_2023, OCT_09_2024),
        ("002", JAN_29_2020, SEP_26_2024),
        ("003", JUL_03_2023, OCT_09_2024),
        ("004", JAN_29_2020, SEP_26_2024),
    ]
    .into_iter()
    .map(|(id, joined, last_login)| {
        Record::new(
            id,
            UserFields {
                full_name: "Christine Brooks".to_owned(),
                email: "Brooks@gmail.com".to_owned(),
                permission: Permission::Admin,
                joined_at: Some(joined),
                last_login_at: Some(last_login),
            },
        )
    })
    .collect()
}

fn emails() -> Vec<Record<EmailFields>> {
    let registered = [
        ("001", "Christine Brooks", "Brooks@gmail.com"),
        ("002", "Christine Brooks", "Brooks@gmail.com"),
        ("003", "Christine Brooks", "Brooks@gmail.com"),
        ("004", "Christine Brooks", "Brooks@gmail.com"),
        ("005", "Long Name Example", "areallylongemailaddresstotestwrapping@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| {
        Record::new(
            id,
            EmailFields { name: Some(name.to_owned()), email: email.to_owned(), audience: Audience::Registered },
        )
    });

    // Newsletter ids are prefixed so both lists share one collection.
    let newsletter = [
        ("n001", "Christine@example.com"),
        ("n002", "Brooks@gmail.com"),
        ("n003", "Another@domain.net"),
        ("n004", "Test@email.co"),
    ]
    .into_iter()
    .map(|(id, email)| {
        Record::new(id, EmailFields { name: None, email: email.to_owned(), audience: Audience::Newsletter })
    });

    registered.chain(newsletter).collect()
}
