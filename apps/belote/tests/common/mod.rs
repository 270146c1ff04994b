#![allow(dead_code)]

use belote::EngineConfig;

#[ctor::ctor]
fn init_logging() {
    belote_test_support::logging::init();
}

pub fn seeded_config(seed: u64) -> EngineConfig {
    EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    }
}
