//! # Domain Model
//!
//! This module defines the core data structures for placez: [`Place`], the
//! caller-supplied [`PlaceInput`], and the three closed vocabularies every place
//! is classified by ([`Category`], [`Status`], [`PriceRange`]).
//!
//! ## Identity and Timestamps
//!
//! A place has three system-owned fields the caller never supplies:
//!
//! - `id`: opaque, unique across the collection, never reused.
//! - `date_added`: set once when the place is created, never mutated.
//! - `last_updated`: set on creation and on every update.
//!
//! Everything else comes from a [`PlaceInput`]. Updates overwrite *all* input
//! fields at once; there is no partial patch at this layer (the CLI merges
//! flags over the current record before calling in).
//!
//! ## Persisted Shape
//!
//! Places are stored as JSON objects with camelCase keys
//! (`priceRange`, `bestTime`, `dateAdded`, `lastUpdated`). Enum values use the
//! lowercase names shown to users (`beach`, `visited`) and the literal dollar
//! strings for price ranges (`$` .. `$$$$`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlacezError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Mountain,
    City,
    Historical,
    Forest,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Beach,
        Category::Mountain,
        Category::City,
        Category::Historical,
        Category::Forest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Mountain => "mountain",
            Category::City => "city",
            Category::Historical => "historical",
            Category::Forest => "forest",
        }
    }

    /// Plural heading used when a list is narrowed to this category.
    pub fn plural_label(&self) -> &'static str {
        match self {
            Category::Beach => "Beaches",
            Category::Mountain => "Mountains",
            Category::City => "Cities",
            Category::Historical => "Historical Sites",
            Category::Forest => "Forests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Visited,
    Planned,
    Wishlist,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Visited, Status::Planned, Status::Wishlist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Visited => "visited",
            Status::Planned => "planned",
            Status::Wishlist => "wishlist",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            Status::Visited => "Visited Places",
            Status::Planned => "Planned Trips",
            Status::Wishlist => "Wishlist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Expensive,
        PriceRange::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Expensive => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }
}

fn parse_vocab<T: Copy>(
    field: &str,
    input: &str,
    all: &[T],
    as_str: impl Fn(&T) -> &'static str,
) -> Result<T, PlacezError> {
    let needle = input.trim().to_lowercase();
    all.iter()
        .find(|v| as_str(v) == needle)
        .copied()
        .ok_or_else(|| {
            let accepted: Vec<&str> = all.iter().map(&as_str).collect();
            PlacezError::Invalid(format!(
                "unknown {} '{}' (expected one of: {})",
                field,
                input,
                accepted.join(", ")
            ))
        })
}

impl FromStr for Category {
    type Err = PlacezError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocab("category", s, &Category::ALL, Category::as_str)
    }
}

impl FromStr for Status {
    type Err = PlacezError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocab("status", s, &Status::ALL, Status::as_str)
    }
}

impl FromStr for PriceRange {
    type Err = PlacezError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vocab("price range", s, &PriceRange::ALL, PriceRange::as_str)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-editable part of a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInput {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub rating: f64,
    pub visitors: u64,
    pub status: Status,
    pub price_range: PriceRange,
    pub best_time: String,
    pub image: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub rating: f64,
    pub visitors: u64,
    pub status: Status,
    pub price_range: PriceRange,
    pub best_time: String,
    pub image: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Place {
    pub fn new(id: String, input: PlaceInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
            location: input.location,
            rating: input.rating,
            visitors: input.visitors,
            status: input.status,
            price_range: input.price_range,
            best_time: input.best_time,
            image: input.image,
            amenities: input.amenities,
            date_added: now,
            last_updated: now,
        }
    }

    /// Overwrites every input field. `id` and `date_added` are kept.
    pub fn apply(&mut self, input: PlaceInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.description = input.description;
        self.category = input.category;
        self.location = input.location;
        self.rating = input.rating;
        self.visitors = input.visitors;
        self.status = input.status;
        self.price_range = input.price_range;
        self.best_time = input.best_time;
        self.image = input.image;
        self.amenities = input.amenities;
        self.last_updated = now;
    }

    /// The editable fields of this place, e.g. as the starting point of an edit.
    pub fn to_input(&self) -> PlaceInput {
        PlaceInput {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            location: self.location.clone(),
            rating: self.rating,
            visitors: self.visitors,
            status: self.status,
            price_range: self.price_range,
            best_time: self.best_time.clone(),
            image: self.image.clone(),
            amenities: self.amenities.clone(),
        }
    }
}
