//! Shared traits, list options, and theme palette for dashboard records.

use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Records that lists search and sort by title, and that edits look up by key.
///
/// Bills answer with their title, budgets with their category.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// The figure used by the `Highest` / `Lowest` orderings.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// One-line summary used in log events.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Index of the first record whose [`NamedEntity::name`] equals `name`.
pub fn position_by_name<T: NamedEntity>(items: &[T], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name() == name)
}

/// Colour used when a record carries no theme and its category is unknown.
pub const DEFAULT_THEME: &str = "#C4C4C4";

static CATEGORY_THEMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Entertainment", "#277C78"),
        ("Bills", "#82C9D7"),
        ("Dining Out", "#F2CDAC"),
        ("Personal Care", "#626070"),
        ("Groceries", "#F9C16B"),
        ("Transportation", "#E55353"),
        ("Education", "#826CB0"),
        ("Lifestyle", "#F59E0B"),
        ("Shopping", "#7C3AED"),
    ])
});

/// Resolves the palette colour for a category, falling back to [`DEFAULT_THEME`].
pub fn category_theme(category: Option<&str>) -> &'static str {
    category
        .and_then(|name| CATEGORY_THEMES.get(name).copied())
        .unwrap_or(DEFAULT_THEME)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Ordering choices offered by the bill and transaction lists.
pub enum SortOption {
    #[default]
    Latest,
    Oldest,
    AZ,
    ZA,
    Highest,
    Lowest,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Latest,
        SortOption::Oldest,
        SortOption::AZ,
        SortOption::ZA,
        SortOption::Highest,
        SortOption::Lowest,
    ];

    /// Returns the wire key used by list controls (`latest`, `az`, ...).
    pub fn key(self) -> &'static str {
        match self {
            SortOption::Latest => "latest",
            SortOption::Oldest => "oldest",
            SortOption::AZ => "az",
            SortOption::ZA => "za",
            SortOption::Highest => "highest",
            SortOption::Lowest => "lowest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOption::Latest => "Latest",
            SortOption::Oldest => "Oldest",
            SortOption::AZ => "A to Z",
            SortOption::ZA => "Z to A",
            SortOption::Highest => "Highest",
            SortOption::Lowest => "Lowest",
        };
        f.write_str(label)
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|option| option.key() == normalized)
            .ok_or_else(|| format!("unknown sort option `{}`", value.trim()))
    }
}
