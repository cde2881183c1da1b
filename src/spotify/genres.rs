use reqwest::{Client, StatusCode};

use crate::{
    config,
    error::{Error, Result},
    types::GenreSeedsResponse,
};

/// Fetches the list of seed genres the recommendations endpoint accepts.
///
/// Used by `genres update` to refresh the local catalog. Single attempt,
/// bearer-authenticated.
pub async fn get_available_genres(token: &str) -> Result<Vec<String>> {
    let api_url = format!(
        "{uri}/recommendations/available-genre-seeds",
        uri = config::spotify_apiurl()
    );

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;

    let status = response.status();
    let body = response.text().await?;
    parse_genre_seeds_response(status, &body)
}

/// Maps a seeds endpoint answer onto the genre list.
pub fn parse_genre_seeds_response(status: StatusCode, body: &str) -> Result<Vec<String>> {
    if !status.is_success() {
        return Err(Error::Request(format!("status code {}", status)));
    }

    let parsed: GenreSeedsResponse =
        serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(parsed.genres)
}
