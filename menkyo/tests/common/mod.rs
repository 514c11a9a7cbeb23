// Shared helpers for integration tests. Each test crate pulls in what it
// needs, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
