use tabled::Table;

use crate::{
    config::Credentials,
    error, info,
    management::GenreCatalogManager,
    spotify::{self, auth::TokenFetcher},
    success,
    types::GenreTableRow,
    utils,
};

/// Lists the genre catalog, or the suggestion dropdown for a search term.
pub async fn list_genres(search: Option<String>) {
    let catalog = match GenreCatalogManager::load().await {
        Ok(catalog) => catalog,
        Err(_) => GenreCatalogManager::bundled(),
    };

    match search {
        Some(term) => {
            let suggestions = catalog.suggest(&term);
            if suggestions.is_empty() {
                info!("No genres matching '{}'.", term);
                return;
            }

            for genre in suggestions {
                println!("  - {}", genre);
            }
        }
        None => {
            let table_rows: Vec<GenreTableRow> = catalog
                .genres()
                .iter()
                .map(|g| GenreTableRow { genre: g.clone() })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
    }
}

/// Refreshes the cached catalog from the available-genre-seeds endpoint.
pub async fn update_genres() {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!("{}", e),
    };
    let fetcher = TokenFetcher::new(credentials);

    let pb = utils::progress_spinner("Requesting access token...");
    let token = match fetcher.request_token().await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot update genre catalog. Err: {}", e);
        }
    };

    pb.set_message("Fetching available genres...");
    let genres = match spotify::genres::get_available_genres(&token.access_token).await {
        Ok(genres) => genres,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot update genre catalog. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    let catalog = GenreCatalogManager::new(genres);
    if let Err(e) = catalog.persist().await {
        error!("Failed to cache genre catalog. Err: {}", e);
    }

    success!("Updated genre catalog ({} genres).", catalog.count());
}
