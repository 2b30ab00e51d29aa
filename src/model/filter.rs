use serde::{Deserialize, Serialize};

use crate::model::todo::Todo;

/// Which slice of the list a subscription covers.
///
/// The tag is part of the read query: the store applies it, not the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterTag {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterTag {
    /// The store-side predicate for this tag.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Active => !todo.completed,
            FilterTag::Completed => todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterTag::All => "all",
            FilterTag::Active => "active",
            FilterTag::Completed => "completed",
        }
    }

    /// Parse a tag name. Unknown names are rejected rather than defaulted.
    pub fn from_str(s: &str) -> Option<FilterTag> {
        match s {
            "all" => Some(FilterTag::All),
            "active" => Some(FilterTag::Active),
            "completed" => Some(FilterTag::Completed),
            _ => None,
        }
    }

    /// Next tag in display order (All → Active → Completed → All).
    pub fn cycle(self) -> FilterTag {
        match self {
            FilterTag::All => FilterTag::Active,
            FilterTag::Active => FilterTag::Completed,
            FilterTag::Completed => FilterTag::All,
        }
    }
}
