pub mod errors;
pub mod models;
pub mod ontology;
mod slot_filler;
#[cfg(test)]
mod testutils;
mod utils;

pub use crate::errors::*;
pub use crate::models::*;
pub use crate::ontology::{EntityValue, Intent, Slot};
pub use crate::slot_filler::{build_slot_filler, RuleBasedSlotFiller, SlotFiller};
pub use crate::utils::{EntityName, IntentName, SlotName};
