use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::order::Order;

/// Which slice of `/api/orders` to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("size", self.size.to_string())]
    }
}

/// Spring Data page envelope. Only `content` and `last` drive pagination,
/// the rest is kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    #[serde(default)]
    pub content: Option<Vec<Order>>,
    #[serde(default)]
    pub last: Option<bool>,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub empty: Option<bool>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

impl OrderPage {
    pub fn new(content: Vec<Order>, last: bool) -> Self {
        Self {
            content: Some(content),
            last: Some(last),
            ..Self::default()
        }
    }

    /// Decodes a response body. A literal `null` body is an empty page.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let page: Option<OrderPage> = serde_json::from_slice(body)?;
        Ok(page.unwrap_or_default())
    }

    pub fn orders(&self) -> &[Order] {
        self.content.as_deref().unwrap_or(&[])
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.content.unwrap_or_default()
    }

    /// End of data: the server says so, or the page came back empty.
    pub fn is_terminal(&self) -> bool {
        self.last == Some(true) || self.orders().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spring_envelope() {
        let body = br#"{
            "content": [
                {"id":1,"orderNo":"A-1","username":"bob","productName":"Mouse","quantity":1,"totalAmount":9.99,"status":"NEW"}
            ],
            "last": false,
            "first": true,
            "number": 0,
            "size": 20,
            "totalPages": 3,
            "totalElements": 41,
            "pageable": {"pageNumber": 0, "pageSize": 20}
        }"#;
        let page = OrderPage::from_slice(body).unwrap();
        assert_eq!(page.orders().len(), 1);
        assert_eq!(page.last, Some(false));
        assert_eq!(page.total_elements, Some(41));
        assert!(!page.is_terminal());
    }

    #[test]
    fn missing_or_null_content_is_empty() {
        let page = OrderPage::from_slice(br#"{"last": false}"#).unwrap();
        assert!(page.orders().is_empty());
        assert!(page.is_terminal());

        let page = OrderPage::from_slice(br#"{"content": null}"#).unwrap();
        assert!(page.is_terminal());
    }

    #[test]
    fn null_body_is_empty_page() {
        let page = OrderPage::from_slice(b"null").unwrap();
        assert_eq!(page, OrderPage::default());
        assert!(page.is_terminal());
    }

    #[test]
    fn last_flag_ends_even_with_rows() {
        let order = Order::new(1, "A", "u", "p", 1, 1.0, "NEW");
        assert!(OrderPage::new(vec![order], true).is_terminal());
    }

    #[test]
    fn one_order_with_null_fields_does_not_sink_the_page() {
        let body = br#"{
            "content": [
                {"id":1,"orderNo":"A-1","username":"bob","productName":"Mouse","quantity":1,"totalAmount":9.99,"status":"NEW"},
                {"id":2,"orderNo":"A-2","username":null,"productName":"Pad","quantity":1,"totalAmount":null,"status":"NEW"}
            ],
            "last": false
        }"#;
        let page = OrderPage::from_slice(body).unwrap();
        assert_eq!(page.orders().len(), 2);
        assert_eq!(page.orders()[0].username, "bob");
        assert_eq!(page.orders()[1].username, "");
        assert_eq!(page.orders()[1].total_amount, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(OrderPage::from_slice(b"<html>oops</html>").is_err());
    }
}
