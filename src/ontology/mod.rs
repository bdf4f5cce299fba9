mod entity;
mod intent;
mod slot;

pub use self::entity::EntityValue;
pub use self::intent::Intent;
pub use self::slot::Slot;
