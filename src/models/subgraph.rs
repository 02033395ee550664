use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SubgraphRef — Named subgraph endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphRef {
    pub name: String,
    pub url: String,
}

impl SubgraphRef {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}
