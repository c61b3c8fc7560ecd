//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, no configuration access, no resolution logic. Just data and simple helpers.

pub mod constants;
pub mod locale;
pub mod search;
