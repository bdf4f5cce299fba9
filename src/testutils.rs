use std::collections::BTreeMap;

use maplit::hashmap;

use crate::models::{RuleTable, SlotDefinition};
use crate::ontology::{EntityValue, Slot};
use crate::utils::SlotName;

/// `book_flight` fills `destination` with cities or airports and `origin` with departure
/// cities, `check_weather` fills `when` with dates
pub fn flight_rules() -> RuleTable {
    RuleTable::new(hashmap! {
        "book_flight".to_string() => hashmap! {
            "city".to_string() => slot_definition("destination", "city"),
            "airport".to_string() => slot_definition("destination", "airport"),
            "departure_city".to_string() => slot_definition("origin", "departure_city"),
        },
        "check_weather".to_string() => hashmap! {
            "date".to_string() => slot_definition("when", "date"),
        },
    })
}

pub fn slot_definition(slot_name: &str, entity_type: &str) -> SlotDefinition {
    SlotDefinition {
        slot_name: slot_name.to_string(),
        entity_type: entity_type.to_string(),
    }
}

pub fn placeholder(name: &str, types: &[&str]) -> Slot {
    let mut slot = Slot::new(name);
    for entity_type in types {
        slot.add_type(*entity_type);
    }
    slot
}

/// Accepted types come from a hash map, sort them to compare slots
pub fn sorted_types(mut slots: BTreeMap<SlotName, Slot>) -> BTreeMap<SlotName, Slot> {
    for slot in slots.values_mut() {
        slot.types.sort();
    }
    slots
}

pub fn city(body: &str, score: f32) -> EntityValue {
    EntityValue::new("city")
        .with_body(body, 0..body.chars().count())
        .with_score(score)
}
