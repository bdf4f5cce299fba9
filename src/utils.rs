pub type IntentName = String;
pub type SlotName = String;
pub type EntityName = String;
