//! Sample places written to an empty catalog on first access.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Category, Place, PriceRange, Status};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_places() -> Vec<Place> {
    vec![
        Place {
            id: "1".into(),
            name: "Bali Paradise Beach".into(),
            description: "Beautiful white sand beach with crystal clear water. Perfect for surfing and relaxation.".into(),
            category: Category::Beach,
            location: "Bali, Indonesia".into(),
            rating: 4.8,
            visitors: 15000,
            status: Status::Visited,
            price_range: PriceRange::Expensive,
            best_time: "April - October".into(),
            image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4".into(),
            amenities: strings(&["WiFi", "Restaurant", "Parking", "Beach Access", "Spa"]),
            date_added: day(2024, 1, 15),
            last_updated: day(2024, 1, 20),
        },
        Place {
            id: "2".into(),
            name: "Himalayan Trek".into(),
            description: "Challenging trek through the majestic Himalayas with breathtaking views.".into(),
            category: Category::Mountain,
            location: "Nepal".into(),
            rating: 4.9,
            visitors: 8500,
            status: Status::Planned,
            price_range: PriceRange::Moderate,
            best_time: "March - May".into(),
            image: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b".into(),
            amenities: strings(&["Guide", "Camping", "First Aid", "Transport"]),
            date_added: day(2024, 2, 10),
            last_updated: day(2024, 2, 10),
        },
        Place {
            id: "3".into(),
            name: "Tokyo City Lights".into(),
            description: "Experience the vibrant city life, modern technology and traditional culture.".into(),
            category: Category::City,
            location: "Tokyo, Japan".into(),
            rating: 4.7,
            visitors: 25000,
            status: Status::Wishlist,
            price_range: PriceRange::Luxury,
            best_time: "All Year".into(),
            image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf".into(),
            amenities: strings(&["WiFi", "Hotels", "Restaurants", "Shopping", "Transport"]),
            date_added: day(2024, 1, 20),
            last_updated: day(2024, 1, 20),
        },
        Place {
            id: "4".into(),
            name: "Amazon Rainforest".into(),
            description: "Explore the world's largest tropical rainforest with diverse wildlife.".into(),
            category: Category::Forest,
            location: "Brazil".into(),
            rating: 4.6,
            visitors: 5000,
            status: Status::Planned,
            price_range: PriceRange::Expensive,
            best_time: "June - November".into(),
            image: "https://images.unsplash.com/photo-1448375240586-882707db888b".into(),
            amenities: strings(&["Guide", "Lodging", "Meals", "Transport"]),
            date_added: day(2024, 3, 5),
            last_updated: day(2024, 3, 5),
        },
        Place {
            id: "5".into(),
            name: "Rome Historical Tour".into(),
            description: "Walk through ancient history with iconic monuments and architecture.".into(),
            category: Category::Historical,
            location: "Rome, Italy".into(),
            rating: 4.9,
            visitors: 32000,
            status: Status::Visited,
            price_range: PriceRange::Expensive,
            best_time: "April - June".into(),
            image: "https://images.unsplash.com/photo-1552832230-c0197dd311b5".into(),
            amenities: strings(&["Guides", "Audio Tours", "Restaurants", "Museums"]),
            date_added: day(2024, 1, 25),
            last_updated: day(2024, 2, 15),
        },
    ]
}
