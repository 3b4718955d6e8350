use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use url::Url;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::model::{OrderPage, PageRequest};
use crate::source::OrderSource;

const ORDERS_PATH: &str = "/api/orders";

/// Reads pages from a Spring-style `GET /api/orders?page=&size=` endpoint.
pub struct HttpOrderSource {
    client: Client,
    endpoint: Url,
}

impl HttpOrderSource {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(api_base)?.join(ORDERS_PATH)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::new(&config.api_base, config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(request.query_pairs());
        url
    }

    async fn get_page(&self, request: PageRequest) -> Result<OrderPage> {
        let url = self.page_url(request);
        log::debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ViewerError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        let page = OrderPage::from_slice(&body)?;

        log::debug!(
            "page {} returned {} orders (last={:?}, total_elements={:?})",
            request.page,
            page.orders().len(),
            page.last,
            page.total_elements
        );
        Ok(page)
    }
}

impl OrderSource for HttpOrderSource {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'_, Result<OrderPage>> {
        self.get_page(request).boxed()
    }
}
