//! Unit tests for the timeline module.
