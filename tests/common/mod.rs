#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use order_list_view::{Order, OrderPage, OrderSource, PageRequest, Result, ViewerError};

pub enum Scripted {
    Page(OrderPage),
    Fail,
}

/// In-memory stand-in for the orders endpoint. Unscripted pages come back empty.
#[derive(Default)]
pub struct ScriptedSource {
    pages: Mutex<HashMap<u32, Scripted>>,
    calls: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, content: Vec<Order>, last: bool) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(page, Scripted::Page(OrderPage::new(content, last)));
        self
    }

    pub fn failing(self, page: u32) -> Self {
        self.pages.lock().unwrap().insert(page, Scripted::Fail);
        self
    }

    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl OrderSource for ScriptedSource {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'_, Result<OrderPage>> {
        self.calls.lock().unwrap().push(request);
        let result = match self.pages.lock().unwrap().get(&request.page) {
            Some(Scripted::Page(page)) => Ok(page.clone()),
            Some(Scripted::Fail) => Err(ViewerError::Status(502)),
            None => Ok(OrderPage::default()),
        };
        async move { result }.boxed()
    }
}

pub fn orders(ids: std::ops::Range<u64>) -> Vec<Order> {
    ids.map(|id| {
        Order::new(
            id,
            format!("ORD-{:04}", id),
            format!("user{}", id % 3),
            "Widget",
            (id % 5) as i64 + 1,
            id as f64 * 1.5,
            "PAID",
        )
    })
    .collect()
}
