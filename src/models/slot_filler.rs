use serde_derive::{Deserialize, Serialize};

use crate::models::rules::RuleTable;

#[derive(Debug, Deserialize)]
pub struct SlotFillerModel {
    pub rules: RuleTable,
    #[serde(default)]
    pub config: SlotFillerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFillerConfig {
    /// Allow several entities of an accepted type into the same slot
    #[serde(default = "default_true")]
    pub fill_multiple: bool,
    /// Order entities by decreasing score, otherwise by increasing alternative index
    #[serde(default = "default_true")]
    pub sort_by_score: bool,
}

impl Default for SlotFillerConfig {
    fn default() -> Self {
        Self {
            fill_multiple: true,
            sort_by_score: true,
        }
    }
}

fn default_true() -> bool {
    true
}
