// src/tests/mod.rs

//! Tests for _mntrlib_.
//!
//! Tests are placed at `src/tests/`, inside the `mntrlib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility. Those tests use only the public API.

pub mod common;
pub mod filepreprocessor_tests;
