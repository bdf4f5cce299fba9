pub mod processing_unit_metadata;
pub mod rules;
pub mod slot_filler;

pub use self::processing_unit_metadata::*;
pub use self::rules::*;
pub use self::slot_filler::*;
