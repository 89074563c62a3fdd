use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PlacezError, Result};
use crate::model::PlaceInput;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

pub fn run<B: StorageBackend>(store: &mut PlaceStore<B>, input: PlaceInput) -> Result<CmdResult> {
    let id = store.create(input)?;
    let place = store
        .get_by_id(&id)?
        .ok_or_else(|| PlacezError::Store(format!("Created place {} vanished", id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Place added ({}): {}",
        place.id, place.name
    )));
    Ok(result.with_affected_places(vec![place]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_store, sample_input};

    #[test]
    fn adds_place_and_reports_it() {
        let mut store = make_store();
        let result = run(&mut store, sample_input("Kyoto")).unwrap();

        assert_eq!(result.affected_places.len(), 1);
        let place = &result.affected_places[0];
        assert_eq!(place.name, "Kyoto");
        assert!(result.messages[0].content.contains(&place.id));
        assert_eq!(store.get_all().unwrap().len(), 6);
    }
}
