use crate::config::ScrollMode;
use crate::error::Result;
use crate::model::{Order, OrderPage, PageRequest};

/// What the status line under the table should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    NoMoreData,
    Idle,
}

impl StatusLine {
    pub fn text(self) -> &'static str {
        match self {
            StatusLine::Loading => "Loading...",
            StatusLine::NoMoreData => "No more data",
            StatusLine::Idle => "",
        }
    }
}

/// Result of applying a finished fetch to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded {
        page: u32,
        /// Page 0 replaces the list, every later page appends.
        replaced: bool,
        added: usize,
    },
    Failed {
        page: u32,
    },
}

/// Accumulated order list plus the two flags gating a monotonically
/// increasing page counter. Terminal once `has_more` is false.
#[derive(Debug, Clone)]
pub struct OrderListView {
    orders: Vec<Order>,
    page: u32,
    size: u32,
    loading: bool,
    has_more: bool,
    mode: ScrollMode,
    received_first: bool,
}

impl OrderListView {
    pub fn new(size: u32, mode: ScrollMode) -> Self {
        Self {
            orders: Vec::new(),
            page: 0,
            size,
            loading: false,
            has_more: true,
            mode,
            received_first: false,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// True once any fetch has succeeded. Drives the single-page placeholder.
    pub fn has_received_first(&self) -> bool {
        self.received_first
    }

    /// Runs on mount and after every page change. Returns the request to
    /// issue, or `None` when the list is already exhausted.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if !self.has_more && self.page > 0 {
            return None;
        }
        if self.mode == ScrollMode::Single && self.page > 0 {
            return None;
        }
        self.loading = true;
        Some(PageRequest::new(self.page, self.size))
    }

    /// Applies the response for `request`. Errors are logged and leave the
    /// list untouched; loading is cleared either way.
    pub fn complete_fetch(&mut self, request: PageRequest, result: Result<OrderPage>) -> FetchOutcome {
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                log::error!("Fetch error for page {}: {}", request.page, e);
                return FetchOutcome::Failed { page: request.page };
            }
        };

        let no_more = page.is_terminal();
        let list = page.into_orders();
        let added = list.len();
        let replaced = request.page == 0;

        if replaced {
            self.orders = list;
        } else {
            self.orders.extend(list);
        }
        self.has_more = !no_more;
        self.received_first = true;

        log::info!(
            "page {} loaded: {} orders ({} total, has_more={})",
            request.page,
            added,
            self.orders.len(),
            self.has_more
        );

        FetchOutcome::Loaded {
            page: request.page,
            replaced,
            added,
        }
    }

    /// Sentinel visibility callback. Advances the page by one when the
    /// sentinel is in view, nothing is in flight and more data is expected.
    /// Returns whether the caller should run the fetch effect.
    pub fn on_sentinel(&mut self, intersecting: bool) -> bool {
        if self.mode == ScrollMode::Single {
            return false;
        }
        if !intersecting || self.loading || !self.has_more {
            return false;
        }
        self.page += 1;
        log::debug!("sentinel visible, advancing to page {}", self.page);
        true
    }

    pub fn status(&self) -> StatusLine {
        if self.loading {
            StatusLine::Loading
        } else if !self.has_more {
            StatusLine::NoMoreData
        } else {
            StatusLine::Idle
        }
    }

    /// The rows appended or replaced by the last successful fetch.
    pub fn latest_rows(&self, outcome: FetchOutcome) -> &[Order] {
        match outcome {
            FetchOutcome::Loaded { added, .. } => {
                let start = self.orders.len().saturating_sub(added);
                &self.orders[start..]
            }
            FetchOutcome::Failed { .. } => &[],
        }
    }
}
