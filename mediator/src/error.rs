use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    #[error("Unknown partition: {0}")]
    UnknownKey(String),
}
