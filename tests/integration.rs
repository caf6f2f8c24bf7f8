//! Integration tests for console-helper

#[path = "integration/helpers/mod.rs"]
pub mod helpers;

#[path = "integration/snapshot_render_test.rs"]
mod snapshot_render_test;

#[path = "integration/prompt_flow_test.rs"]
mod prompt_flow_test;

#[path = "integration/spinner_thread_test.rs"]
mod spinner_thread_test;
