//! Command label normalization and counting
//!
//! Labels are built by [`normalize_command`], counted by [`build_tally`], and ranked by
//! [`CommandTally::top`](crate::models::CommandTally::top).

pub mod builder;
pub mod normalize;

pub use builder::{build_tally, tally_labels};
pub use normalize::normalize_command;
