//! Bundled seed data.

pub mod sample;

pub use sample::{fixed_starting, sample_lineups, sample_roster};
