//! Workspace-level integration tests for KeyCalc.
//!
//! The tests themselves live in `tests/`; golden data in `tests/testdata/`.
