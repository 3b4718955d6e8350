pub mod http;

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::model::{OrderPage, PageRequest};

pub use http::HttpOrderSource;

/// Anything that can hand back one page of orders.
pub trait OrderSource: Send + Sync {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'_, Result<OrderPage>>;
}
