use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;
use std::collections::HashSet;

/// Deletes every listed id. Unknown ids produce a warning, not an error, so
/// one stale id does not block the rest of a batch.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut PlaceStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut seen = HashSet::new();

    for id in ids.iter().map(|i| i.as_ref()) {
        if !seen.insert(id) {
            continue;
        }
        match store.delete(id)? {
            Some(place) => {
                result.add_message(CmdMessage::success(format!(
                    "Place deleted ({}): {}",
                    place.id, place.name
                )));
                result.affected_places.push(place);
            }
            None => result.add_message(CmdMessage::warning(format!("Place not found: {}", id))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::make_store;

    #[test]
    fn deletes_batch() {
        let mut store = make_store();
        let result = run(&mut store, &["1", "5"]).unwrap();

        assert_eq!(result.affected_places.len(), 2);
        assert_eq!(store.get_all().unwrap().len(), 3);
        assert_eq!(store.statistics().unwrap().total_places, 3);
    }

    #[test]
    fn unknown_ids_warn_and_continue() {
        let mut store = make_store();
        let result = run(&mut store, &["nope", "2"]).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].level, MessageLevel::Success);
        assert_eq!(store.get_all().unwrap().len(), 4);
    }

    #[test]
    fn duplicate_ids_are_deleted_once() {
        let mut store = make_store();
        let result = run(&mut store, &["3", "3"]).unwrap();
        assert_eq!(result.affected_places.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}
