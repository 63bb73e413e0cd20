//! JSON boundary for the presentation layer.

pub mod json_api;

pub use json_api::{
    execute_command, execute_command_json, snapshot_json, CommandError, CommandResponse,
    LineupView, StateSnapshot, SCHEMA_VERSION,
};
