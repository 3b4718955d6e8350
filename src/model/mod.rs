pub mod order;
pub mod page;

pub use order::Order;
pub use page::{OrderPage, PageRequest};
