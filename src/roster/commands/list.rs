use crate::commands::{CmdResult, PageInfo};
use crate::error::Result;
use crate::model::{PageRequest, SortSpec};
use crate::query;
use crate::records::RecordStore;
use crate::store::Persistence;

pub fn run<P: Persistence>(
    store: &RecordStore<P>,
    filter_term: &str,
    sort: &SortSpec,
    page: &PageRequest,
) -> Result<CmdResult> {
    let view = query::view(store.all(), filter_term, sort, page);
    let info = PageInfo {
        page: page.page,
        per_page: page.per_page,
        total_filtered: view.total_filtered,
        total_pages: view.total_pages,
    };
    Ok(CmdResult::default()
        .with_listed(view.items)
        .with_page(info))
}
