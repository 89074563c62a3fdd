use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

/// Clears every place and immediately restores the sample set.
pub fn run<B: StorageBackend>(store: &mut PlaceStore<B>) -> Result<CmdResult> {
    store.reset()?;
    store.initialize()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "All travel places cleared. Sample data restored.",
    ));
    Ok(result.with_statistics(store.statistics()?))
}
