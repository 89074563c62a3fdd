use crate::commands::{CmdResult, PageInfo};
use crate::error::Result;
use crate::query::{self, ViewParams};
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

pub fn run<B: StorageBackend>(
    store: &PlaceStore<B>,
    view: &ViewParams,
    page: usize,
) -> Result<CmdResult> {
    let ordered = query::run(store.get_all()?, view);
    let page = query::paginate(&ordered, page);

    let info = PageInfo {
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
    };
    Ok(CmdResult::default()
        .with_listed_places(page.places)
        .with_page(info))
}
