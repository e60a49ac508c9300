//! AI configuration handling.
//!
//! Drivers describe a seat as a JSON object: standard fields are extracted
//! here and anything else is preserved in `custom` for the AI to read.
//!
//! ```json
//! {"seed": 12345, "order_up_threshold": 3}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// AI-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl AiConfig {
    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }
}
