use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("Invalid mode: '{0}'; only 'U' or 'D' are supported")]
    UnknownMode(char),
}
