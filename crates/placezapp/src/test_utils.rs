use crate::model::{Category, PlaceInput, PriceRange, Status};
use crate::store::mem_backend::MemBackend;
use crate::store::place_store::PlaceStore;

pub fn make_store() -> PlaceStore<MemBackend> {
    PlaceStore::with_backend(MemBackend::new())
}

/// A valid input with the given name; other fields are plausible defaults.
pub fn sample_input(name: &str) -> PlaceInput {
    PlaceInput {
        name: name.to_string(),
        description: format!("{} description", name),
        category: Category::City,
        location: "Somewhere".to_string(),
        rating: 4.2,
        visitors: 100,
        status: Status::Wishlist,
        price_range: PriceRange::Moderate,
        best_time: "All Year".to_string(),
        image: "https://example.com/place.jpg".to_string(),
        amenities: vec!["WiFi".to_string()],
    }
}
