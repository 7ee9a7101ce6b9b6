mod error;
pub mod mail;
pub mod stock;

pub use error::FeedError;
