use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_or_default, env_parse, env_parse_opt, env_secs};
use core_grpc::{ChannelConfig, DEFAULT_STREAM_CONCURRENCY};

use crate::cache::CacheConfig;
use crate::error::{MetaError, MetaResult};

/// Accepted vector dimensionality, inclusive on both ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self { min: 2, max: 65536 }
    }
}

impl DimensionBounds {
    pub fn check(&self, api: &'static str, vector: &[f32]) -> MetaResult<()> {
        let dim = vector.len();
        if dim < self.min || dim > self.max {
            return Err(MetaError::InvalidArgument(format!(
                "{api}: vector dimension {dim} outside [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Everything the gateway needs besides the listen address.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub backend_addr: String,
    pub meta_addr: String,
    /// `None` disables the mapping cache.
    pub cache: Option<CacheConfig>,
    pub monitor_interval: Duration,
    pub stream_concurrency: usize,
    pub dimensions: DimensionBounds,
    pub channel: ChannelConfig,
}

impl FromEnv for GatewayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cache = if env_parse("META_CACHE_ENABLED", true)? {
            Some(CacheConfig {
                expire_duration: env_secs("META_CACHE_EXPIRE_SECS", 600)?,
                expire_check_duration: env_secs("META_CACHE_CHECK_SECS", 60)?,
                max_entries: env_parse_opt("META_CACHE_MAX_ENTRIES")?,
            })
        } else {
            None
        };

        let dimensions = DimensionBounds {
            min: env_parse("VECTOR_MIN_DIMENSION", 2)?,
            max: env_parse("VECTOR_MAX_DIMENSION", 65536)?,
        };
        if dimensions.min > dimensions.max {
            return Err(ConfigError::ParseError {
                key: "VECTOR_MIN_DIMENSION".to_string(),
                details: format!("{} exceeds VECTOR_MAX_DIMENSION {}", dimensions.min, dimensions.max),
            });
        }

        let stream_concurrency = env_parse("STREAM_CONCURRENCY", DEFAULT_STREAM_CONCURRENCY)?;
        if stream_concurrency == 0 {
            return Err(ConfigError::ParseError {
                key: "STREAM_CONCURRENCY".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            backend_addr: env_or_default("VECTOR_BACKEND_ADDR", "http://localhost:8082"),
            meta_addr: env_or_default("META_STORE_ADDR", "http://localhost:8083"),
            cache,
            monitor_interval: env_secs("META_MONITOR_INTERVAL_SECS", 5)?,
            stream_concurrency,
            dimensions,
            channel: ChannelConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 10] = [
        "VECTOR_BACKEND_ADDR",
        "META_STORE_ADDR",
        "META_CACHE_ENABLED",
        "META_CACHE_EXPIRE_SECS",
        "META_CACHE_CHECK_SECS",
        "META_CACHE_MAX_ENTRIES",
        "META_MONITOR_INTERVAL_SECS",
        "STREAM_CONCURRENCY",
        "VECTOR_MIN_DIMENSION",
        "VECTOR_MAX_DIMENSION",
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = GatewayConfig::from_env().unwrap();
            assert_eq!(config.backend_addr, "http://localhost:8082");
            assert_eq!(config.meta_addr, "http://localhost:8083");
            let cache = config.cache.expect("cache enabled by default");
            assert_eq!(cache.expire_duration, Duration::from_secs(600));
            assert_eq!(cache.expire_check_duration, Duration::from_secs(60));
            assert_eq!(cache.max_entries, None);
            assert_eq!(config.monitor_interval, Duration::from_secs(5));
            assert_eq!(config.stream_concurrency, 20);
            assert_eq!(config.dimensions, DimensionBounds::default());
        });
    }

    #[test]
    fn test_cache_disabled() {
        temp_env::with_var("META_CACHE_ENABLED", Some("false"), || {
            let config = GatewayConfig::from_env().unwrap();
            assert!(config.cache.is_none());
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("VECTOR_BACKEND_ADDR", Some("http://agent:8081")),
                ("META_CACHE_MAX_ENTRIES", Some("1000")),
                ("META_CACHE_EXPIRE_SECS", Some("30")),
                ("STREAM_CONCURRENCY", Some("4")),
                ("VECTOR_MIN_DIMENSION", Some("8")),
                ("VECTOR_MAX_DIMENSION", Some("128")),
            ],
            || {
                let config = GatewayConfig::from_env().unwrap();
                assert_eq!(config.backend_addr, "http://agent:8081");
                let cache = config.cache.unwrap();
                assert_eq!(cache.max_entries, Some(1000));
                assert_eq!(cache.expire_duration, Duration::from_secs(30));
                assert_eq!(config.stream_concurrency, 4);
                assert_eq!(config.dimensions, DimensionBounds { min: 8, max: 128 });
            },
        );
    }

    #[test]
    fn test_inverted_dimension_bounds_rejected() {
        temp_env::with_vars(
            [
                ("VECTOR_MIN_DIMENSION", Some("64")),
                ("VECTOR_MAX_DIMENSION", Some("8")),
            ],
            || {
                assert!(GatewayConfig::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        temp_env::with_var("STREAM_CONCURRENCY", Some("0"), || {
            let err = GatewayConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("STREAM_CONCURRENCY"));
        });
    }

    #[test]
    fn test_dimension_check() {
        let bounds = DimensionBounds { min: 2, max: 3 };
        assert!(bounds.check("Search", &[0.0, 1.0]).is_ok());
        assert!(bounds.check("Search", &[0.0, 1.0, 2.0]).is_ok());
        assert!(bounds.check("Search", &[0.0]).is_err());
        assert!(bounds.check("Search", &[0.0; 4]).is_err());
    }
}
