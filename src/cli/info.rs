use chrono::DateTime;

use crate::{config, info, management::GenreCatalogManager, warning};

/// Displays catalog and configuration status.
///
/// # Arguments
///
/// * `genres` - Show where the genre catalog comes from, its size and when
///   it was last updated
/// * `config` - Show the data directory, endpoint URLs and whether
///   credentials are configured
///
/// With no flag both sections are shown. Credential values are never
/// printed, only their presence.
///
/// # Output Examples
///
/// ```text
/// [o] Genre catalog: cached (126 genres)
/// [o] Catalog updated: 2026-08-20 14:02 UTC
/// [o] Data directory: /home/user/.local/share/sporecli
/// [o] API URL: https://api.spotify.com/v1
/// [o] Token URL: https://accounts.spotify.com/api/token
/// [o] Credentials: configured
/// ```
pub async fn info(genres: bool, config: bool) {
    let show_all = !genres && !config;

    if genres || show_all {
        match GenreCatalogManager::load().await {
            Ok(catalog) => {
                info!("Genre catalog: cached ({} genres)", catalog.count());
                if catalog.updated_at() > 0 {
                    if let Some(updated) = DateTime::from_timestamp(catalog.updated_at() as i64, 0)
                    {
                        info!("Catalog updated: {}", updated.format("%Y-%m-%d %H:%M UTC"));
                    }
                }
            }
            Err(_) => {
                let bundled = GenreCatalogManager::bundled();
                info!("Genre catalog: bundled ({} genres)", bundled.count());
                info!("Run sporecli genres update to fetch the current seed list.");
            }
        }
    }

    if config || show_all {
        info!("Data directory: {}", config::data_dir().display());
        info!("API URL: {}", config::spotify_apiurl());
        info!("Token URL: {}", config::spotify_apitoken_url());
        if config::credentials_configured() {
            info!("Credentials: configured");
        } else {
            warning!(
                "Credentials: missing (set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET)"
            );
        }
    }
}
