//! Stop-db function configuration.

use std::env;

use tracing::warn;

use common::{AppResult, AwsClientConfig, LogFormat};
use domain::{ENV_DB_CLUSTER_IDENTIFIER, ENV_LOG_FORMAT};

/// Stop-db function configuration.
#[derive(Debug, Clone, Default)]
pub struct StopDbFunctionConfig {
    /// Cluster to stop; passed through as-is, even when unset
    pub db_cluster_identifier: Option<String>,
    /// AWS client overrides
    pub aws: AwsClientConfig,
    /// Log line format
    pub log_format: LogFormat,
    /// Why `LOG_FORMAT` was ignored, reported once tracing is up
    pub log_format_rejection: Option<String>,
}

impl StopDbFunctionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (log_format, log_format_rejection) = match lookup(ENV_LOG_FORMAT) {
            Some(value) => match value.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(err) => (LogFormat::default(), Some(err.to_string())),
            },
            None => (LogFormat::default(), None),
        };

        Ok(Self {
            db_cluster_identifier: lookup(ENV_DB_CLUSTER_IDENTIFIER),
            aws: AwsClientConfig::default(),
            log_format,
            log_format_rejection,
        })
    }

    /// Log settings that were ignored while loading. Call after tracing init.
    pub fn report_ignored(&self) {
        if let Some(reason) = &self.log_format_rejection {
            warn!("{}; falling back to text logs", reason);
        }
    }

    /// Replace the target cluster (CLI override).
    pub fn with_cluster(mut self, identifier: Option<String>) -> Self {
        if identifier.is_some() {
            self.db_cluster_identifier = identifier;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tracing_test::traced_test;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_reads_cluster_identifier() {
        let config = StopDbFunctionConfig::from_lookup(lookup_from(&[(
            "DB_CLUSTER_IDENTIFIER",
            "app-db-cluster",
        )]))
        .unwrap();

        assert_eq!(config.db_cluster_identifier.as_deref(), Some("app-db-cluster"));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_missing_identifier_is_not_an_error() {
        let config = StopDbFunctionConfig::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.db_cluster_identifier.is_none());
    }

    #[test]
    fn test_empty_identifier_is_kept_verbatim() {
        let config =
            StopDbFunctionConfig::from_lookup(lookup_from(&[("DB_CLUSTER_IDENTIFIER", "")]))
                .unwrap();

        assert_eq!(config.db_cluster_identifier.as_deref(), Some(""));
    }

    #[test]
    fn test_log_format_from_env() {
        let config =
            StopDbFunctionConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "json")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.log_format_rejection.is_none());
    }

    #[traced_test]
    #[test]
    fn test_unknown_log_format_falls_back_to_text() {
        let config = StopDbFunctionConfig::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "xml"),
            ("DB_CLUSTER_IDENTIFIER", "app-db"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.db_cluster_identifier.as_deref(), Some("app-db"));

        config.report_ignored();
        assert!(logs_contain("unknown log format 'xml'"));
        assert!(logs_contain("falling back to text logs"));
    }

    #[test]
    fn test_cli_cluster_override() {
        let config = StopDbFunctionConfig::from_lookup(lookup_from(&[(
            "DB_CLUSTER_IDENTIFIER",
            "from-env",
        )]))
        .unwrap();

        let kept = config.clone().with_cluster(None);
        assert_eq!(kept.db_cluster_identifier.as_deref(), Some("from-env"));

        let replaced = config.with_cluster(Some("from-cli".to_string()));
        assert_eq!(replaced.db_cluster_identifier.as_deref(), Some("from-cli"));
    }
}
