use serde_derive::{Deserialize, Serialize};

use crate::ontology::EntityValue;
use crate::utils::{EntityName, SlotName};

/// Named container filled by entities of the accepted types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: SlotName,
    #[serde(rename = "type")]
    pub types: Vec<EntityName>,
    #[serde(default)]
    pub values: Vec<EntityValue>,
}

impl Slot {
    /// Empty placeholder, waiting for entities
    pub fn new<S: Into<SlotName>>(name: S) -> Self {
        Self {
            name: name.into(),
            types: vec![],
            values: vec![],
        }
    }

    /// Slot holding a single entity, named after the slot the entity is associated with
    pub fn from_entity(entity: EntityValue) -> Option<Self> {
        let name = entity.slot_name.clone()?;
        Some(Self {
            name,
            types: vec![entity.entity_type.clone()],
            values: vec![entity],
        })
    }

    pub fn accepts(&self, entity_type: &str) -> bool {
        self.types.iter().any(|t| t == entity_type)
    }

    pub fn add_type<S: Into<EntityName>>(&mut self, entity_type: S) -> &mut Self {
        let entity_type = entity_type.into();
        if !self.accepts(&entity_type) {
            self.types.push(entity_type);
        }
        self
    }

    /// Appends the entity if its type is accepted, and returns whether it was added
    pub fn add(&mut self, entity: EntityValue) -> bool {
        if !self.accepts(&entity.entity_type) {
            return false;
        }
        self.values.push(entity);
        true
    }

    pub fn clear(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entity() {
        // Given
        let entity = EntityValue::new("city")
            .with_slot_name("destination")
            .with_score(0.7);

        // When
        let slot = Slot::from_entity(entity.clone());

        // Then
        let expected_slot = Some(Slot {
            name: "destination".to_string(),
            types: vec!["city".to_string()],
            values: vec![entity],
        });
        assert_eq!(expected_slot, slot);
    }

    #[test]
    fn test_from_entity_without_slot_name() {
        assert_eq!(None, Slot::from_entity(EntityValue::new("city")));
    }

    #[test]
    fn test_add_type_is_idempotent() {
        // Given
        let mut slot = Slot::new("destination");

        // When
        slot.add_type("city").add_type("airport").add_type("city");

        // Then
        assert_eq!(vec!["city".to_string(), "airport".to_string()], slot.types);
    }

    #[test]
    fn test_add_rejects_unaccepted_type() {
        // Given
        let mut slot = Slot::new("destination");
        slot.add_type("city");

        // When
        let added_city = slot.add(EntityValue::new("city"));
        let added_date = slot.add(EntityValue::new("date"));

        // Then
        assert!(added_city);
        assert!(!added_date);
        assert_eq!(vec![EntityValue::new("city")], slot.values);
    }

    #[test]
    fn test_clear() {
        // Given
        let mut slot = Slot::from_entity(EntityValue::new("city").with_slot_name("destination"))
            .unwrap();

        // When
        slot.clear();

        // Then
        assert!(slot.is_empty());
        assert_eq!(vec!["city".to_string()], slot.types);
    }

    #[test]
    fn test_serialize() {
        // Given
        let mut slot = Slot::new("destination");
        slot.add_type("city");

        // When
        let json = serde_json::to_value(&slot).unwrap();

        // Then
        assert_eq!(
            serde_json::json!({"name": "destination", "type": ["city"], "values": []}),
            json
        );
    }
}
