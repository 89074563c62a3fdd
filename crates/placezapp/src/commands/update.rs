use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PlacezError, Result};
use crate::model::PlaceInput;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

pub fn run<B: StorageBackend>(
    store: &mut PlaceStore<B>,
    id: &str,
    input: PlaceInput,
) -> Result<CmdResult> {
    let place = store
        .update(id, input)?
        .ok_or_else(|| PlacezError::PlaceNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Place updated ({}): {}",
        place.id, place.name
    )));
    Ok(result.with_affected_places(vec![place]))
}
