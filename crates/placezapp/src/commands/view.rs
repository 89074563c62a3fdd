use crate::commands::CmdResult;
use crate::error::{PlacezError, Result};
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

pub fn run<B: StorageBackend>(store: &PlaceStore<B>, id: &str) -> Result<CmdResult> {
    let place = store
        .get_by_id(id)?
        .ok_or_else(|| PlacezError::PlaceNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_places(vec![place]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_store;

    #[test]
    fn views_seed_place() {
        let store = make_store();
        let result = run(&store, "4").unwrap();
        assert_eq!(result.listed_places[0].name, "Amazon Rainforest");
    }

    #[test]
    fn missing_place_is_an_error() {
        let store = make_store();
        match run(&store, "nope") {
            Err(PlacezError::PlaceNotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("Expected PlaceNotFound, got {:?}", other),
        }
    }
}
