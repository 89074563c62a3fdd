//! # Catalog Statistics
//!
//! [`Statistics`] is an aggregate over the place collection. It is never a
//! source of truth: [`Statistics::compute`] derives it from the places alone,
//! and the store keeps a cached copy that it recomputes after every mutation.
//!
//! Every category and every status appears in the per-bucket maps, with a
//! count of zero when no place falls into it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Category, Place, Status};

/// Ratings at or above this count as "top rated".
pub const TOP_RATED_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_places: usize,
    pub top_rated: usize,
    pub most_visited: u64,
    pub upcoming: usize,
    pub total_visitors: u64,
    pub average_rating: f64,
    pub categories: BTreeMap<Category, usize>,
    #[serde(rename = "status")]
    pub statuses: BTreeMap<Status, usize>,
    pub last_updated: DateTime<Utc>,
}

impl Statistics {
    pub fn compute(places: &[Place], now: DateTime<Utc>) -> Self {
        let total_places = places.len();
        let total_visitors = places
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.visitors));
        let most_visited = places.iter().map(|p| p.visitors).max().unwrap_or(0);

        let average_rating = if total_places == 0 {
            0.0
        } else {
            let sum: f64 = places.iter().map(|p| p.rating).sum();
            round_one_decimal(sum / total_places as f64)
        };

        let categories = Category::ALL
            .iter()
            .map(|c| (*c, places.iter().filter(|p| p.category == *c).count()))
            .collect();
        let statuses = Status::ALL
            .iter()
            .map(|s| (*s, places.iter().filter(|p| p.status == *s).count()))
            .collect();

        Self {
            total_places,
            top_rated: places
                .iter()
                .filter(|p| p.rating >= TOP_RATED_THRESHOLD)
                .count(),
            most_visited,
            upcoming: places.iter().filter(|p| p.status == Status::Planned).count(),
            total_visitors,
            average_rating,
            categories,
            statuses,
            last_updated: now,
        }
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn status_count(&self, status: Status) -> usize {
        self.statuses.get(&status).copied().unwrap_or(0)
    }

    /// True when both describe the same collection, ignoring when each was computed.
    pub fn same_figures(&self, other: &Statistics) -> bool {
        Statistics {
            last_updated: other.last_updated,
            ..self.clone()
        } == *other
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
