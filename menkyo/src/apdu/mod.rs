// menkyo-rs/menkyo/src/apdu/mod.rs

pub mod catalog;
pub mod response;

pub use catalog::{CATALOG_VERSION, Command};
pub use response::{ApduResponse, StatusWord};
