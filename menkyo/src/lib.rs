// menkyo-rs/menkyo/src/lib.rs

//! menkyo
//!
//! Reader for Japanese driver's license (運転免許証) and vehicle inspection
//! (車検証) IC cards over PC/SC, with a presence monitor that reads each
//! inserted card once.
#![warn(missing_docs)]

pub mod apdu;
pub mod card;
pub mod constants;
pub mod error;
pub mod monitor;
pub mod prelude;
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
