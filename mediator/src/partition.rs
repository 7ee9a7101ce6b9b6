use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::PartitionError;

/// Discriminator selecting which mediator governs a binding.
///
/// One mediator exists per key value; the key decides through [`PartitionKey::admits`]
/// whether a publisher's new value concerns its observers.
pub trait PartitionKey: Copy + Eq + Debug + Display + 'static {
    /// Value held by the publishers of this partition.
    type Value: Debug;

    fn admits(&self, value: &Self::Value) -> bool;
}

pub fn parse_key<K>(name: &str) -> Result<K, PartitionError>
where
    K: PartitionKey + FromStr,
{
    K::from_str(name.trim()).map_err(|_| PartitionError::UnknownKey(name.to_string()))
}
