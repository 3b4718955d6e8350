pub mod render;
pub mod state;

pub use state::{FetchOutcome, OrderListView, StatusLine};

use crate::source::OrderSource;

/// Runs the fetch effect to completion against `source`. Returns `None`
/// when the view had nothing to fetch.
pub async fn run_fetch(view: &mut OrderListView, source: &dyn OrderSource) -> Option<FetchOutcome> {
    let request = view.begin_fetch()?;
    let result = source.fetch_page(request).await;
    Some(view.complete_fetch(request, result))
}
