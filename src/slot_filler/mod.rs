mod rule_based_slot_filler;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use failure::ResultExt;

pub use self::rule_based_slot_filler::RuleBasedSlotFiller;
use crate::errors::*;
use crate::models::{ProcessingUnitMetadata, RuleTable, SlotFillerConfig};
use crate::ontology::{EntityValue, Intent};
use crate::utils::SlotName;

pub trait SlotFiller: Send + Sync {
    /// Fills the slots of the first intent with the entities, other intents are returned
    /// untouched
    fn fill(
        &self,
        intents: Vec<Intent>,
        entities: Vec<EntityValue>,
        expected_slots: Option<&HashSet<SlotName>>,
    ) -> Vec<Intent>;

    fn rules(&self) -> &RuleTable;

    fn config(&self) -> SlotFillerConfig;
}

pub fn build_slot_filler<P: AsRef<Path>>(path: P) -> Result<Box<dyn SlotFiller>> {
    let metadata_path = path.as_ref().join("metadata.json");
    let metadata_file = fs::File::open(&metadata_path).with_context(|_| {
        format!(
            "Could not open metadata file of slot filler '{:?}'",
            path.as_ref()
        )
    })?;
    let metadata: ProcessingUnitMetadata = serde_json::from_reader(metadata_file)
        .with_context(|_| format!("Could not deserialize json metadata '{:?}'", metadata_path))?;
    match metadata {
        ProcessingUnitMetadata::RuleBasedSlotFiller => {
            Ok(Box::new(RuleBasedSlotFiller::from_path(path)?) as _)
        }
    }
}
