use proptest::test_runner::Config;

/// Case count comes from `PROPTEST_CASES` (default 64) so CI can dial it up.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(64);
    Config {
        cases,
        ..Config::default()
    }
}
