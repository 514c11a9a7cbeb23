// menkyo-rs/menkyo/src/session/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::{MockBackend, MockCard, MockLog, MockReply};
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscBackend;
pub use traits::{CardBackend, CardSession};
