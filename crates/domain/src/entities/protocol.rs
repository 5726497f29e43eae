use serde::{Deserialize, Serialize};

/// A lending or liquidity protocol that can be compared on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}

impl Protocol {
    pub fn new(id: impl Into<String>, name: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo_url: logo_url.into(),
        }
    }
}
