//! Property test suite entry point.

mod derivation_props;
