use serde::{Deserialize, Serialize};

/// Server to browser updates on `/ws`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewUpdate {
    /// Rendered `<tr>` rows for one page.
    Rows {
        page: u32,
        replace: bool,
        html: String,
    },

    Status {
        text: String,
    },
}

/// Browser to server commands on `/ws`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// The sentinel crossed into the (margin-extended) viewport.
    SentinelVisible,
}

impl ViewCommand {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "sentinel" => Some(ViewCommand::SentinelVisible),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
