/// Application-level constants
pub const APP_NAME: &str = "medextract";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inputs larger than this get a warning before extraction. Nothing is
/// truncated — processing cost is linear in input length — the warning flags
/// callers that forgot to bound their input upstream.
pub const INPUT_SIZE_ADVISORY_BYTES: usize = 1_000_000;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_to_crate() {
        let filter = default_log_filter();
        assert!(filter.starts_with(APP_NAME));
        assert!(filter.ends_with("info"));
    }

    #[test]
    fn app_name_matches_package() {
        assert_eq!(APP_NAME, env!("CARGO_PKG_NAME"));
    }
}
