
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod view;


pub use model::{Order, OrderPage, PageRequest};

pub use config::{ScrollMode, ViewerConfig};
pub use error::{Result, ViewerError};
pub use source::{HttpOrderSource, OrderSource};
pub use view::{FetchOutcome, OrderListView, StatusLine};
