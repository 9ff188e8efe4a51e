//! Connection pool construction.

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::config::{DatabaseConfig, PoolSettings};

/// Pool options for the given settings. Zero idle/lifetime timeouts mean "never".
pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout((settings.idle_timeout_secs > 0).then(|| Duration::from_secs(settings.idle_timeout_secs)))
        .max_lifetime((settings.max_lifetime_secs > 0).then(|| Duration::from_secs(settings.max_lifetime_secs)))
}

/// Open the main connection pool
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = config.connect_options()?;
    let pool = pool_options(&config.pool).connect_with(options).await?;

    info!(
        max_connections = config.pool.max_connections,
        min_connections = config.pool.min_connections,
        "Connected to database"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_follow_settings() {
        let settings = PoolSettings {
            max_connections: 7,
            min_connections: 2,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 0,
            max_lifetime_secs: 60,
        };

        let options = pool_options(&settings);

        assert_eq!(options.get_max_connections(), 7);
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(60)));
    }
}
