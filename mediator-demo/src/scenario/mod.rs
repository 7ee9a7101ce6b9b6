pub mod mail;
pub mod stock;
