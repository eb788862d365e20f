//! Unit test suite entry point.

mod fixtures;
