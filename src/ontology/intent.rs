use std::collections::{BTreeMap, HashSet};

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::models::RuleTable;
use crate::ontology::{EntityValue, Slot};
use crate::utils::{IntentName, SlotName};

/// A classified intent and the slots filled for it
///
/// Slots are kept ordered by name, which makes candidate lookup and serialization
/// independent of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: IntentName,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub alternative_index: Option<usize>,
    #[serde(default)]
    pub slots: BTreeMap<SlotName, Slot>,
}

impl Intent {
    pub fn new<S: Into<IntentName>>(name: S) -> Self {
        Self {
            name: name.into(),
            score: None,
            alternative_index: None,
            slots: BTreeMap::new(),
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    /// Creates an empty placeholder for every slot the rules define for this intent
    ///
    /// Existing slots are reused, and each one accumulates the entity types mapped to it.
    pub fn apply(&mut self, rules: &RuleTable) -> &mut Self {
        let intent_rules = match rules.rules_for(&self.name) {
            Some(intent_rules) => intent_rules,
            None => return self,
        };
        for definition in intent_rules.values() {
            self.slots
                .entry(definition.slot_name.clone())
                .or_insert_with(|| Slot::new(definition.slot_name.clone()))
                .add_type(definition.entity_type.as_str());
        }
        self
    }

    /// Places the entity in the slot accepting its type, if any
    ///
    /// When `expected_slots` is provided and not empty, only the listed slots can be filled.
    /// Without `fill_multiple`, a slot which already holds a value is left untouched.
    pub fn fill_slot(
        &mut self,
        entity: EntityValue,
        fill_multiple: bool,
        expected_slots: Option<&HashSet<SlotName>>,
    ) -> &mut Self {
        let slot = match self
            .slots
            .values_mut()
            .find(|slot| slot.accepts(&entity.entity_type))
        {
            Some(slot) => slot,
            None => {
                debug!(
                    "No slot of intent '{}' accepts entity type '{}'",
                    self.name, entity.entity_type
                );
                return self;
            }
        };
        if let Some(expected_slots) = expected_slots.filter(|slots| !slots.is_empty()) {
            if !expected_slots.contains(&slot.name) {
                debug!("Slot '{}' is not expected, skipping entity", slot.name);
                return self;
            }
        }
        if !fill_multiple && !slot.is_empty() {
            debug!("Slot '{}' is already filled", slot.name);
            return self;
        }
        slot.add(entity);
        self
    }

    /// Removes the slots which did not receive any value
    pub fn cleanup(&mut self) -> &mut Self {
        let initial_count = self.slots.len();
        self.slots.retain(|_, slot| !slot.is_empty());
        debug!(
            "Removed {} empty slot(s) from intent '{}'",
            initial_count - self.slots.len(),
            self.name
        );
        self
    }
}
