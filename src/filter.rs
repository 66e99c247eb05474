use std::str::FromStr;

use derive_builder::Builder;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use serde::{Deserialize, Serialize};

use crate::data::{Category, MenuItem};
use crate::error::SiteError;

/// Number of popular dishes previewed on the home page.
pub const PREVIEW_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl Diet {
    pub fn admits(self, veg: bool) -> bool {
        match self {
            Self::All => true,
            Self::Veg => veg,
            Self::NonVeg => !veg,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
        }
    }
}

impl FromStr for Diet {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "veg" => Ok(Self::Veg),
            "nonveg" | "non-veg" => Ok(Self::NonVeg),
            _ => Err(SiteError::UnknownDiet(s.to_string())),
        }
    }
}

/// The three menu page filters. Every field defaults to "no filter".
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default)]
pub struct MenuQuery {
    /// `None` is the "All" tab.
    #[builder(setter(strip_option))]
    pub category: Option<Category>,
    pub diet: Diet,
    #[builder(setter(into))]
    pub search: String,
}

impl MenuQuery {
    /// Parse the raw query string values of the menu page. `All` and blank mean no category.
    pub fn parse(
        category: Option<&str>,
        diet: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, SiteError> {
        let category = match category.map(str::trim) {
            None | Some("") => None,
            Some(label) if label.eq_ignore_ascii_case("all") => None,
            Some(label) => Some(label.parse()?),
        };
        let diet = diet.map(str::parse::<Diet>).transpose()?.unwrap_or_default();

        Ok(Self {
            category,
            diet,
            search: search.unwrap_or_default().to_string(),
        })
    }

    /// Trimmed search text for display and suggestions, `None` when the search box is effectively empty.
    pub fn search_text(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|s| !s.is_empty())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.diet == Diet::All && self.search_text().is_none()
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            category: self.category,
            diet: self.diet,
            // blank means off, otherwise matched untrimmed
            needle: self
                .search_text()
                .map(|_| self.search.to_lowercase()),
        }
    }
}

struct Matcher {
    category: Option<Category>,
    diet: Diet,
    needle: Option<String>,
}

impl Matcher {
    fn matches(&self, item: &MenuItem) -> bool {
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if !self.diet.admits(item.veg) {
            return false;
        }
        match &self.needle {
            Some(needle) => {
                item.name.to_lowercase().contains(needle.as_str())
                    || item.description.to_lowercase().contains(needle.as_str())
            }
            None => true,
        }
    }
}

/// Items satisfying every active filter, in catalog order.
pub fn filter<'a>(items: &'a [MenuItem], query: &MenuQuery) -> Vec<&'a MenuItem> {
    let matcher = query.matcher();
    items.iter().filter(|item| matcher.matches(item)).collect()
}

pub fn popular_preview(items: &[MenuItem]) -> Vec<&MenuItem> {
    items
        .iter()
        .filter(|item| item.popular)
        .take(PREVIEW_LIMIT)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: &'static str,
    #[serde(skip)]
    pub category: Option<Category>,
    pub count: usize,
}

/// Tab counts: `All` first, then every category in tab order.
pub fn category_counts(items: &[MenuItem]) -> Vec<CategoryCount> {
    let all = CategoryCount {
        label: "All",
        category: None,
        count: items.len(),
    };
    let per_category = Category::ALL.into_iter().map(|category| CategoryCount {
        label: category.label(),
        category: Some(category),
        count: items.iter().filter(|item| item.category == category).count(),
    });

    std::iter::once(all).chain(per_category).collect()
}

/// Closest item names for a search, best match first. Used when a search finds nothing.
pub fn suggest<'a>(items: &'a [MenuItem], search: &str, limit: usize) -> Vec<&'a str> {
    let pattern = search.trim();
    if pattern.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = items
        .iter()
        .filter_map(|item| {
            matcher
                .fuzzy_match(item.name, pattern)
                .map(|score| (score, item.name))
        })
        .collect::<Vec<_>>();
    // stable, so equal scores keep catalog order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, name)| name).collect()
}
