use proptest::prelude::ProptestConfig;

/// Default case count for property tests outside the engine crate.
pub const DEFAULT_CASES: u32 = 32;

/// Reads `PROPTEST_CASES`, falling back to [`DEFAULT_CASES`].
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CASES);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
