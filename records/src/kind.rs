//! Entity kind discriminant shared by routes, refresh keys, and panels.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use serde::{Deserialize, Serialize};

/// One of the managed record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    AdType,
    PromotionPower,
    Duration,
    AdShow,
    Category,
    User,
    Email,
}

impl EntityKind {
    /// Every kind, in sidebar/display order.
    pub const ALL: [Self; 7] = [
        Self::AdType,
        Self::PromotionPower,
        Self::Duration,
        Self::AdShow,
        Self::Category,
        Self::User,
        Self::Email,
    ];

    /// URL path segment used by the REST collaborator (`/api/records/{slug}`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::AdType => "ad-types",
            Self::PromotionPower => "promotion-powers",
            Self::Duration => "durations",
            Self::AdShow => "ad-shows",
            Self::Category => "categories",
            Self::User => "users",
            Self::Email => "emails",
        }
    }

    /// Parse a path segment produced by [`EntityKind::slug`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Singular display label, used in panel titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AdType => "Ad Type",
            Self::PromotionPower => "Promotion Power",
            Self::Duration => "Duration",
            Self::AdShow => "Ad Show Option",
            Self::Category => "Category",
            Self::User => "User",
            Self::Email => "Email",
        }
    }

    /// Heading shown on the collapsible card for this kind.
    #[must_use]
    pub fn card_title(self) -> &'static str {
        match self {
            Self::AdShow => "Ad Show Options",
            Self::Category => "Product Categories",
            Self::User => "Users",
            Self::Email => "Email List",
            other => other.label(),
        }
    }

    /// Lowercase plural, used in status messages.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::AdType => "ad types",
            Self::PromotionPower => "promotion powers",
            Self::Duration => "durations",
            Self::AdShow => "ad show options",
            Self::Category => "categories",
            Self::User => "users",
            Self::Email => "emails",
        }
    }

    /// Message shown by a card when its collection fails to load.
    #[must_use]
    pub fn load_error(self) -> String {
        format!("Failed to load {}.", self.plural())
    }

    /// Message shown by a card whose loaded collection is empty.
    #[must_use]
    pub fn empty_message(self) -> String {
        format!("No {} defined yet.", self.plural())
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
