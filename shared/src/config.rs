use tracing::warn;

/// Process-wide configuration, loaded once at startup from the environment.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub cache_ttl_ms: u64,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_CACHE_TTL_MS: u64 = 60_000;

    pub fn from_env() -> Self {
        let host =
            std::env::var("CATALOG_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = match std::env::var("CATALOG_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("CATALOG_PORT '{}' is not a valid port, using {}", raw, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            Err(_) => Self::DEFAULT_PORT,
        };
        let cache_ttl_ms = match std::env::var("CATALOG_CACHE_TTL_MS") {
            Ok(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!(
                    "CATALOG_CACHE_TTL_MS '{}' is not a valid duration, using {}",
                    raw,
                    Self::DEFAULT_CACHE_TTL_MS
                );
                Self::DEFAULT_CACHE_TTL_MS
            }),
            Err(_) => Self::DEFAULT_CACHE_TTL_MS,
        };

        Self {
            host,
            port,
            data_dir: std::env::var("CATALOG_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            cache_ttl_ms,
        }
    }
}
