//! Library half of the `fraudgym` runner, split out so the episode loop can
//! be exercised from integration tests.

pub mod app;
