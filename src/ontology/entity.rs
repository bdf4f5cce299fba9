use std::ops::Range;

use serde_derive::{Deserialize, Serialize};

use crate::utils::{EntityName, SlotName};

/// An entity recognized upstream, as consumed by slot filling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    #[serde(rename = "type")]
    pub entity_type: EntityName,
    #[serde(default)]
    pub slot_name: Option<SlotName>,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub alternative_index: Option<usize>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub range: Range<usize>,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl EntityValue {
    pub fn new<S: Into<EntityName>>(entity_type: S) -> Self {
        Self {
            entity_type: entity_type.into(),
            slot_name: None,
            score: None,
            alternative_index: None,
            body: String::new(),
            range: 0..0,
            value: serde_json::Value::Null,
        }
    }

    pub fn with_slot_name<S: Into<SlotName>>(mut self, slot_name: S) -> Self {
        self.slot_name = Some(slot_name.into());
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_alternative_index(mut self, alternative_index: usize) -> Self {
        self.alternative_index = Some(alternative_index);
        self
    }

    pub fn with_body<S: Into<String>>(mut self, body: S, range: Range<usize>) -> Self {
        self.body = body.into();
        self.range = range;
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = value;
        self
    }

    /// Confidence used for ordering, a missing score counts as 0
    pub fn score_or_default(&self) -> f32 {
        self.score.unwrap_or(0.0)
    }

    /// Parse rank used for ordering, a missing index counts as 0
    pub fn alternative_index_or_default(&self) -> usize {
        self.alternative_index.unwrap_or(0)
    }
}
