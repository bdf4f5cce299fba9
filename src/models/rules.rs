use std::collections::HashMap;

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::utils::{EntityName, IntentName, SlotName};

/// Target of a rule: the slot an entity type fills, and the type that slot accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub slot_name: SlotName,
    pub entity_type: EntityName,
}

/// Static association `intent -> entity type -> slot definition`
///
/// Several entity types of the same intent may point to the same slot, in which case the
/// slot accepts all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable(HashMap<IntentName, HashMap<EntityName, SlotDefinition>>);

impl RuleTable {
    pub fn new(rules: HashMap<IntentName, HashMap<EntityName, SlotDefinition>>) -> Self {
        Self(rules)
    }

    pub fn rules_for(&self, intent_name: &str) -> Option<&HashMap<EntityName, SlotDefinition>> {
        self.0.get(intent_name)
    }

    /// Rejects slot definitions with an empty slot name or entity type.
    ///
    /// Intents and entity types are checked in lexicographic order so that the reported
    /// rule does not depend on hashing.
    pub fn validate(&self) -> Result<()> {
        for (intent, intent_rules) in self.0.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            for (entity_type, definition) in intent_rules.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                let reason = if definition.slot_name.is_empty() {
                    Some("empty slot name")
                } else if definition.entity_type.is_empty() {
                    Some("empty entity type")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(SlotFillerError::InvalidRule {
                        intent: intent.to_string(),
                        entity_type: entity_type.to_string(),
                        reason,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
