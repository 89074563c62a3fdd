//! # Query Pipeline
//!
//! A pure transformation from the full place collection and a set of view
//! parameters to the ordered list a UI displays. Nothing here touches storage.
//!
//! ## Stages
//!
//! Applied in this fixed order, each stage consuming the previous output:
//!
//! 1. **Base selection**: a non-empty search string wins over the category
//!    filter. The search is a case-insensitive substring match on `name`,
//!    `description`, `location` and `category`. Without a search string the
//!    category filter applies.
//! 2. **Status filter**
//! 3. **Price filter** (exact price range)
//! 4. **Sort**: stable, so ties keep the order of the previous stage.
//!
//! Pagination is separate ([`paginate`]): the caller slices the final list
//! into pages of [`PAGE_SIZE`].
//!
//! ## Lenient Parsing
//!
//! View parameters usually arrive as loose strings from a UI. Anything that is
//! not a known value is treated as "no filter" (or the `name` sort), never
//! as an error. `"all"` is simply one such value.

use icu_collator::{Collator, CollatorOptions};
use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

use crate::model::{Category, Place, PriceRange, Status};

pub const PAGE_SIZE: usize = 6;

/// Either pass everything through, or keep only one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: FromStr + Copy + PartialEq> Filter<T> {
    /// Unknown keys, including `"all"`, become [`Filter::All`].
    pub fn parse(key: &str) -> Self {
        key.parse().map(Filter::Only).unwrap_or(Filter::All)
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Rating,
    Visitors,
    Date,
}

impl SortKey {
    /// Unknown keys sort by name.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "rating" => SortKey::Rating,
            "visitors" => SortKey::Visitors,
            "date" => SortKey::Date,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Visitors => "visitors",
            SortKey::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub category: Filter<Category>,
    pub status: Filter<Status>,
    pub search: Option<String>,
    pub sort: SortKey,
    pub price: Filter<PriceRange>,
}

impl ViewParams {
    /// Builds view parameters from the loose string keys a UI hands over.
    pub fn from_keys(category: &str, status: &str, search: &str, sort: &str, price: &str) -> Self {
        Self {
            category: Filter::parse(category),
            status: Filter::parse(status),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
            sort: SortKey::parse(sort),
            price: Filter::parse(price),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The search term that drives base selection, if any.
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Case-insensitive containment search. A blank query keeps everything.
pub fn search(places: Vec<Place>, query: &str) -> Vec<Place> {
    if query.trim().is_empty() {
        return places;
    }

    let term = query.to_lowercase();
    places
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.location.to_lowercase().contains(&term)
                || p.category.as_str().contains(&term)
        })
        .collect()
}

/// Root-locale collation: accents and case are secondary to the base letter.
fn sort_by_name(places: &mut [Place]) {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => places.sort_by(|a, b| collator.compare(&a.name, &b.name)),
        Err(e) => {
            warn!(error = ?e, "collation data unavailable, sorting names by code point");
            places.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
}

/// Stable sort by `key`. Name ascending; everything else largest/newest first.
pub fn sort_places(places: &mut [Place], key: SortKey) {
    match key {
        SortKey::Name => sort_by_name(places),
        SortKey::Rating => places.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Visitors => places.sort_by(|a, b| b.visitors.cmp(&a.visitors)),
        SortKey::Date => places.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
    }
}

/// Runs the full filter and sort pipeline over `places`.
pub fn run(places: Vec<Place>, view: &ViewParams) -> Vec<Place> {
    let selected = match view.active_search() {
        Some(term) => search(places, term),
        None => places
            .into_iter()
            .filter(|p| view.category.matches(p.category))
            .collect(),
    };

    let mut filtered: Vec<Place> = selected
        .into_iter()
        .filter(|p| view.status.matches(p.status))
        .filter(|p| view.price.matches(p.price_range))
        .collect();

    sort_places(&mut filtered, view.sort);
    filtered
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub places: Vec<Place>,
    /// 1-based page number actually served.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`. Page 0 is treated as page 1;
/// a page past the end is empty.
pub fn paginate(places: &[Place], page: usize) -> Page {
    let page = page.max(1);
    let total_items = places.len();
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(total_items);
    let end = page.saturating_mul(PAGE_SIZE).min(total_items);

    Page {
        places: places[start..end].to_vec(),
        page,
        total_pages: total_items.div_ceil(PAGE_SIZE),
        total_items,
    }
}
