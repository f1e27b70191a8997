//! Integration test modules.

mod config_test;
mod workout_execution_test;
