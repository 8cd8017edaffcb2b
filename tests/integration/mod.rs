//! Integration tests for snapframe

mod cli_commands;
mod config_integration;
mod junction_pipeline;
mod set_algebra;
mod test_utils;
