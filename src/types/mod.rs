//! Common types used across the Steam client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
