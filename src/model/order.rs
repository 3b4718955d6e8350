use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order_no: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

/// A `null` text field renders as an empty cell instead of failing the page.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Order {
    pub fn new(
        id: u64,
        order_no: impl Into<String>,
        username: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        total_amount: f64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            order_no: order_no.into(),
            username: username.into(),
            product_name: product_name.into(),
            quantity: Some(quantity),
            total_amount: Some(total_amount),
            status: status.into(),
        }
    }
}
