use super::backend::StorageBackend;
use super::{PLACES_KEY, STATS_KEY};
use crate::error::Result;
use crate::model::{Category, Place, PlaceInput, Status};
use crate::seed::sample_places;
use crate::stats::Statistics;
use chrono::Utc;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// A persisted value that exists but cannot be decoded.
#[derive(Error, Debug)]
#[error("corrupted value under '{key}': {source}")]
pub struct Corrupted {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

fn decode<T: DeserializeOwned>(key: &'static str, raw: &str) -> std::result::Result<T, Corrupted> {
    serde_json::from_str(raw).map_err(|source| Corrupted { key, source })
}

pub fn decode_places(raw: &str) -> std::result::Result<Vec<Place>, Corrupted> {
    decode(PLACES_KEY, raw)
}

pub fn decode_statistics(raw: &str) -> std::result::Result<Statistics, Corrupted> {
    decode(STATS_KEY, raw)
}

/// Draws time-ordered ids until one is not taken.
fn generate_id(existing: &[Place]) -> String {
    loop {
        let candidate = Uuid::now_v7().simple().to_string();
        if !existing.iter().any(|p| p.id == candidate) {
            return candidate;
        }
    }
}

pub struct PlaceStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> PlaceStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Seeds the collection if none is stored. Safe to call on every access path.
    pub fn initialize(&self) -> Result<()> {
        if self.backend.get(PLACES_KEY)?.is_none() {
            self.seed()?;
        }
        Ok(())
    }

    fn seed(&self) -> Result<Vec<Place>> {
        let places = sample_places();
        self.write_places(&places)?;
        debug!(count = places.len(), "seeded place collection");
        Ok(places)
    }

    /// All places in stored order.
    ///
    /// A collection that fails to decode is discarded together with its
    /// statistics and replaced by the seed set.
    pub fn get_all(&self) -> Result<Vec<Place>> {
        let Some(raw) = self.backend.get(PLACES_KEY)? else {
            return self.seed();
        };

        match decode_places(&raw) {
            Ok(places) => Ok(places),
            Err(corrupted) => {
                warn!(error = %corrupted, "discarding corrupted place collection, reseeding");
                self.backend.remove(PLACES_KEY)?;
                self.backend.remove(STATS_KEY)?;
                self.seed()
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Place>> {
        Ok(self.get_all()?.into_iter().find(|p| p.id == id))
    }

    /// Appends a new place and returns its id.
    pub fn create(&mut self, input: PlaceInput) -> Result<String> {
        let mut places = self.get_all()?;
        let id = generate_id(&places);

        places.push(Place::new(id.clone(), input, Utc::now()));
        self.write_places(&places)?;

        debug!(id = %id, "place created");
        Ok(id)
    }

    /// Replaces every editable field of `id`. Returns None if no such place exists.
    pub fn update(&mut self, id: &str, input: PlaceInput) -> Result<Option<Place>> {
        let mut places = self.get_all()?;
        let Some(place) = places.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        place.apply(input, Utc::now());
        let updated = place.clone();
        self.write_places(&places)?;

        debug!(id = %id, "place updated");
        Ok(Some(updated))
    }

    /// Removes `id`. Returns the removed place, or None if no such place exists.
    pub fn delete(&mut self, id: &str) -> Result<Option<Place>> {
        let mut places = self.get_all()?;
        let Some(pos) = places.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let removed = places.remove(pos);
        self.write_places(&places)?;

        debug!(id = %id, "place deleted");
        Ok(Some(removed))
    }

    /// Cached statistics, recomputed when the cache is missing or unreadable.
    pub fn statistics(&self) -> Result<Statistics> {
        if let Some(raw) = self.backend.get(STATS_KEY)? {
            match decode_statistics(&raw) {
                Ok(stats) => return Ok(stats),
                Err(corrupted) => {
                    warn!(error = %corrupted, "discarding corrupted statistics, recomputing");
                    self.backend.remove(STATS_KEY)?;
                }
            }
        }

        let places = self.get_all()?;
        self.refresh_statistics(&places)
    }

    pub fn category_count(&self, category: Category) -> Result<usize> {
        Ok(self.statistics()?.category_count(category))
    }

    pub fn status_count(&self, status: Status) -> Result<usize> {
        Ok(self.statistics()?.status_count(status))
    }

    /// Drops the collection and its statistics. The next access reseeds.
    pub fn reset(&mut self) -> Result<()> {
        self.backend.remove(PLACES_KEY)?;
        self.backend.remove(STATS_KEY)?;
        debug!("place collection cleared");
        Ok(())
    }

    fn write_places(&self, places: &[Place]) -> Result<Statistics> {
        let json = serde_json::to_string(places)?;
        self.backend.set(PLACES_KEY, &json)?;
        self.refresh_statistics(places)
    }

    fn refresh_statistics(&self, places: &[Place]) -> Result<Statistics> {
        let stats = Statistics::compute(places, Utc::now());
        self.backend.set(STATS_KEY, &serde_json::to_string(&stats)?)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{make_store, sample_input};
    use proptest::prelude::*;
    use tracing_test::traced_test;

    // --- Seeding ---

    #[test]
    fn test_get_all_seeds_empty_storage() {
        let store = make_store();
        let places = store.get_all().unwrap();

        assert_eq!(places.len(), 5);
        assert_eq!(places[0].name, "Bali Paradise Beach");
        assert!(store.backend.contains_key(PLACES_KEY));
        assert!(store.backend.contains_key(STATS_KEY));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut store = make_store();
        store.initialize().unwrap();
        let once = store.get_all().unwrap();

        store.initialize().unwrap();
        assert_eq!(store.get_all().unwrap(), once);

        // Initialize must not clobber user data either
        store.create(sample_input("Kyoto")).unwrap();
        store.initialize().unwrap();
        assert_eq!(store.get_all().unwrap().len(), 6);
    }

    #[test]
    fn test_initialize_keeps_emptied_collection() {
        let mut store = make_store();
        for place in store.get_all().unwrap() {
            store.delete(&place.id).unwrap();
        }
        store.initialize().unwrap();
        assert!(store.get_all().unwrap().is_empty());
    }

    // --- Corruption Recovery ---

    #[test]
    #[traced_test]
    fn test_corrupted_collection_is_reseeded() {
        let backend = MemBackend::new();
        backend.insert_raw(PLACES_KEY, "[{not json");
        backend.insert_raw(STATS_KEY, "{\"totalPlaces\": 99}");

        let store = PlaceStore::with_backend(backend);
        let places = store.get_all().unwrap();

        assert_eq!(places.len(), 5);
        assert!(decode_places(&store.backend.get(PLACES_KEY).unwrap().unwrap()).is_ok());
        assert_eq!(store.statistics().unwrap().total_places, 5);
        assert!(logs_contain("discarding corrupted place collection"));
    }

    #[test]
    fn test_wrong_shape_counts_as_corrupted() {
        let backend = MemBackend::new();
        backend.insert_raw(PLACES_KEY, "{\"id\": \"1\"}");

        let store = PlaceStore::with_backend(backend);
        assert_eq!(store.get_all().unwrap().len(), 5);
    }

    #[test]
    #[traced_test]
    fn test_corrupted_statistics_are_recomputed() {
        let mut store = make_store();
        store.create(sample_input("Kyoto")).unwrap();
        store.backend.insert_raw(STATS_KEY, "garbage");

        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_places, 6);
        assert!(logs_contain("discarding corrupted statistics"));

        // And the recomputed value is cached again
        let cached = store.backend.get(STATS_KEY).unwrap().unwrap();
        assert!(decode_statistics(&cached).is_ok());
    }

    #[test]
    fn test_decode_reports_key() {
        let err = decode_places("nope").unwrap_err();
        assert_eq!(err.key, PLACES_KEY);
        assert!(err.to_string().contains(PLACES_KEY));
    }

    // --- CRUD ---

    #[test]
    fn test_create_then_get_by_id() {
        let mut store = make_store();
        let input = sample_input("Kyoto Temples");
        let before = Utc::now();

        let id = store.create(input.clone()).unwrap();
        let place = store.get_by_id(&id).unwrap().unwrap();

        assert_eq!(place.id, id);
        assert_eq!(place.to_input(), input);
        assert!(place.date_added >= before);
        assert_eq!(place.date_added, place.last_updated);
        // Appended at the end
        assert_eq!(store.get_all().unwrap().last().unwrap().id, id);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = make_store();
        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            ids.insert(store.create(sample_input(&format!("P{}", i))).unwrap());
        }
        assert_eq!(ids.len(), 50);
        // Seed ids are never reused either
        assert!(!ids.contains("1"));
    }

    #[test]
    fn test_generate_id_skips_taken_ids() {
        let mut places = crate::seed::sample_places();
        for _ in 0..10 {
            let id = generate_id(&places);
            assert!(places.iter().all(|p| p.id != id));
            places[0].id = id;
        }
    }

    #[test]
    fn test_update_preserves_identity() {
        let mut store = make_store();
        let original = store.get_by_id("1").unwrap().unwrap();

        let mut input = original.to_input();
        input.name = "Bali Hidden Cove".into();
        input.status = Status::Planned;
        let updated = store.update("1", input).unwrap().unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.date_added, original.date_added);
        assert!(updated.last_updated > original.last_updated);
        assert_eq!(updated.name, "Bali Hidden Cove");
        assert_eq!(store.get_by_id("1").unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = make_store();
        let before = store.get_all().unwrap();

        let result = store.update("missing", sample_input("Ghost")).unwrap();

        assert!(result.is_none());
        assert_eq!(store.get_all().unwrap(), before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = make_store();
        let removed = store.delete("3").unwrap().unwrap();

        assert_eq!(removed.name, "Tokyo City Lights");
        let remaining = store.get_all().unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(store.get_by_id("3").unwrap().is_none());
        // Order of the rest is untouched
        let ids: Vec<&str> = remaining.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = make_store();
        assert!(store.delete("missing").unwrap().is_none());
        assert_eq!(store.get_all().unwrap().len(), 5);
    }

    #[test]
    fn test_write_error_propagates() {
        let mut store = make_store();
        store.initialize().unwrap();
        store.backend.set_simulate_write_error(true);

        assert!(store.create(sample_input("Nope")).is_err());
        store.backend.set_simulate_write_error(false);
        assert_eq!(store.get_all().unwrap().len(), 5);
    }

    // --- Statistics ---

    #[test]
    fn test_statistics_follow_mutations() {
        let mut store = make_store();
        assert_eq!(store.statistics().unwrap().most_visited, 32000);

        store.delete("5").unwrap();
        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_places, 4);
        assert_eq!(stats.most_visited, 25000);
        assert_eq!(store.status_count(Status::Visited).unwrap(), 1);

        let mut input = sample_input("Crowded");
        input.visitors = 1_000_000;
        input.category = Category::Beach;
        store.create(input).unwrap();
        assert_eq!(store.statistics().unwrap().most_visited, 1_000_000);
        assert_eq!(store.category_count(Category::Beach).unwrap(), 2);
    }

    #[test]
    fn test_huge_visitor_count_keeps_cache_current() {
        let mut store = make_store();
        let mut input = sample_input("Everyone Went");
        input.visitors = u64::MAX;
        let id = store.create(input).unwrap();

        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_places, 6);
        assert_eq!(stats.total_visitors, u64::MAX);
        assert_eq!(stats.most_visited, u64::MAX);

        store.delete(&id).unwrap();
        assert_eq!(store.statistics().unwrap().total_visitors, 85500);
    }

    #[test]
    fn test_statistics_of_empty_collection() {
        let mut store = make_store();
        for place in store.get_all().unwrap() {
            store.delete(&place.id).unwrap();
        }
        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_places, 0);
        assert_eq!(stats.most_visited, 0);
    }

    #[test]
    fn test_cached_statistics_match_pure_computation() {
        let mut store = make_store();
        store.create(sample_input("A")).unwrap();
        store.delete("2").unwrap();

        let cached = store.statistics().unwrap();
        let fresh = Statistics::compute(&store.get_all().unwrap(), Utc::now());
        assert!(cached.same_figures(&fresh));
    }

    // --- Reset ---

    #[test]
    fn test_reset_restores_seed() {
        let mut store = make_store();
        store.create(sample_input("Temporary")).unwrap();
        store.delete("1").unwrap();

        store.reset().unwrap();
        assert!(!store.backend.contains_key(PLACES_KEY));
        assert!(!store.backend.contains_key(STATS_KEY));

        let places = store.get_all().unwrap();
        assert_eq!(places.len(), 5);
        assert_eq!(places[0].id, "1");
    }

    // --- Properties ---

    #[derive(Debug, Clone)]
    enum Op {
        Create(f64, u64),
        Update(usize, u64),
        Delete(usize),
        DeleteMissing,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1.0f64..5.0, 0u64..100_000).prop_map(|(r, v)| Op::Create(r, v)),
            (any::<usize>(), 0u64..100_000).prop_map(|(i, v)| Op::Update(i, v)),
            any::<usize>().prop_map(Op::Delete),
            Just(Op::DeleteMissing),
        ]
    }

    proptest! {
        #[test]
        fn prop_statistics_track_collection(ops in proptest::collection::vec(op_strategy(), 0..25)) {
            let mut store = make_store();

            for op in ops {
                let before = store.get_all().unwrap();
                match op {
                    Op::Create(rating, visitors) => {
                        let mut input = sample_input("Generated");
                        input.rating = rating;
                        input.visitors = visitors;
                        store.create(input).unwrap();
                        prop_assert_eq!(store.get_all().unwrap().len(), before.len() + 1);
                    }
                    Op::Update(i, visitors) if !before.is_empty() => {
                        let target = &before[i % before.len()];
                        let mut input = target.to_input();
                        input.visitors = visitors;
                        let updated = store.update(&target.id, input).unwrap().unwrap();
                        prop_assert_eq!(&updated.id, &target.id);
                        prop_assert_eq!(updated.date_added, target.date_added);
                    }
                    Op::Delete(i) if !before.is_empty() => {
                        let target = &before[i % before.len()];
                        store.delete(&target.id).unwrap();
                        prop_assert_eq!(store.get_all().unwrap().len(), before.len() - 1);
                    }
                    _ => {
                        prop_assert!(store.delete("missing").unwrap().is_none());
                        prop_assert_eq!(store.get_all().unwrap(), before);
                    }
                }

                let places = store.get_all().unwrap();
                let stats = store.statistics().unwrap();
                prop_assert_eq!(stats.total_places, places.len());
                prop_assert_eq!(
                    stats.most_visited,
                    places.iter().map(|p| p.visitors).max().unwrap_or(0)
                );
            }
        }
    }
}
