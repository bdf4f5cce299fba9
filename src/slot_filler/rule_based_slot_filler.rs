use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use failure::ResultExt;
use log::info;

use crate::errors::*;
use crate::models::{RuleTable, SlotFillerConfig, SlotFillerModel};
use crate::ontology::{EntityValue, Intent};
use crate::slot_filler::SlotFiller;
use crate::utils::SlotName;

/// Fills intent slots with entities, following an `intent -> entity type -> slot` table
///
/// The filler only reads its rules, so a single instance can be shared between threads.
pub struct RuleBasedSlotFiller {
    rules: RuleTable,
    config: SlotFillerConfig,
}

impl RuleBasedSlotFiller {
    pub fn new(rules: RuleTable, config: SlotFillerConfig) -> Self {
        Self { rules, config }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let slot_filler_model_path = path.as_ref().join("slot_filler.json");
        info!("Loading slot filler ({:?}) ...", slot_filler_model_path);
        let model_file = File::open(&slot_filler_model_path).with_context(|_| {
            SlotFillerError::ModelLoad(slot_filler_model_path.to_string_lossy().to_string())
        })?;
        let model: SlotFillerModel = serde_json::from_reader(model_file)
            .with_context(|_| "Cannot deserialize RuleBasedSlotFiller json data")?;
        model.rules.validate()?;
        info!("Slot filler loaded");
        Ok(Self::new(model.rules, model.config))
    }

    /// Most confident entities first, or entities of the best ranked parse first
    ///
    /// Sorting is stable: entities with equal keys keep their relative order.
    fn sort_entities(&self, mut entities: Vec<EntityValue>) -> Vec<EntityValue> {
        if self.config.sort_by_score {
            entities.sort_by(|a, b| {
                b.score_or_default()
                    .partial_cmp(&a.score_or_default())
                    .unwrap_or(Ordering::Equal)
            });
        } else {
            entities.sort_by_key(|entity| entity.alternative_index_or_default());
        }
        entities
    }
}

impl SlotFiller for RuleBasedSlotFiller {
    fn fill(
        &self,
        mut intents: Vec<Intent>,
        entities: Vec<EntityValue>,
        expected_slots: Option<&HashSet<SlotName>>,
    ) -> Vec<Intent> {
        if intents.is_empty() {
            return intents;
        }
        let intent = &mut intents[0];
        intent.apply(&self.rules);
        for entity in self.sort_entities(entities) {
            intent.fill_slot(entity, self.config.fill_multiple, expected_slots);
        }
        intent.cleanup();
        intents
    }

    fn rules(&self) -> &RuleTable {
        &self.rules
    }

    fn config(&self) -> SlotFillerConfig {
        self.config
    }
}
