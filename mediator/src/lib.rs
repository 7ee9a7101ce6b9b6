mod error;
mod mediator;
mod partition;
mod publisher;

#[cfg(test)]
mod test_utils;

pub use error::PartitionError;
pub use mediator::{Mediator, MediatorSet};
pub use partition::{parse_key, PartitionKey};
pub use publisher::{Publisher, PublisherId};
