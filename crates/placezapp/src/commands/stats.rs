use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

pub fn run<B: StorageBackend>(store: &PlaceStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_statistics(store.statistics()?))
}
