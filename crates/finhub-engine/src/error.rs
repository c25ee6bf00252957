use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Calendar date out of range: {0}")]
    DateOutOfRange(String),
}
