use ira_config::IraConfig;

/// Warn about settings that usually mean requests will fail.
pub fn warn_unconfigured(config: &IraConfig) {
    for warning in collect_warnings(config) {
        tracing::warn!("{warning}");
    }
}

fn collect_warnings(config: &IraConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.api.has_token() {
        warnings.push(
            "no API token configured (IRA_API__TOKEN); protected routes will answer 401"
                .to_string(),
        );
    }
    if config.general.commit_limit == 0 {
        warnings.push("general.commit_limit is 0; commit listings will be empty".to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_reported() {
        let config = IraConfig::default();
        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("IRA_API__TOKEN"));
    }

    #[test]
    fn configured_token_is_quiet() {
        let mut config = IraConfig::default();
        config.api.token = "jwt".to_string();
        assert!(collect_warnings(&config).is_empty());
    }
}
