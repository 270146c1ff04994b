//! Test support shared by the belote crates: logging setup and proptest defaults.

pub mod logging;
pub mod proptest_config;
