//! Cross-layer integration tests for Barrow
//!
//! Tests that drive whole sessions through the engine against the opening
//! scenario.
