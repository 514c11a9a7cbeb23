// menkyo-rs/menkyo/src/card/mod.rs
//! Card-level reads: type detection, license fields, contactless identity,
//! and the single-shot read that ties them together.

pub mod builder;
pub mod detect;
pub mod identity;
pub mod license;
pub mod reader;
pub mod snapshot;

pub use builder::SnapshotBuilder;
pub use detect::{Evidence, RULES, Rule, classify, detect};
pub use identity::{derive_card_id, read_contactless_id};
pub use license::{LicenseFields, extract};
pub use reader::read_once;
pub use snapshot::CardSnapshot;
