use failure::Fail;

#[derive(Debug, Fail)]
pub enum SlotFillerError {
    #[fail(display = "Unable to read file '{}'", _0)]
    ModelLoad(String),
    #[fail(
        display = "Invalid rule for intent '{}' and entity '{}': {}",
        intent, entity_type, reason
    )]
    InvalidRule {
        intent: String,
        entity_type: String,
        reason: &'static str,
    },
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
