use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SiteConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) cors_origin: String,
    pub(crate) log_level: tracing::Level,
    /// Prefix for local asset paths, e.g. a CDN origin.
    pub(crate) asset_base: String,
}

impl SiteConfig {
    /// Read `SITE_*` variables, after loading `.env` when one exists.
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match get("SITE_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT `{port}` is not a port number"))?,
            None => 8080,
        };
        let log_level = match get("SITE_LOG") {
            Some(level) => level
                .trim()
                .parse()
                .with_context(|| format!("SITE_LOG `{level}` is not a log level"))?,
            None => tracing::Level::INFO,
        };

        Ok(Self {
            host: get("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            cors_origin: get("SITE_CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            log_level,
            asset_base: get("SITE_ASSET_BASE").unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<SiteConfig> {
        let vars: HashMap<_, _> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert!(config.asset_base.is_empty());
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", "3001"),
            ("SITE_LOG", "debug"),
            ("SITE_ASSET_BASE", "https://cdn.example.com"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.asset_base, "https://cdn.example.com");
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = config(&[("SITE_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
        assert!(config(&[("SITE_LOG", "loud")]).is_err());
    }
}
