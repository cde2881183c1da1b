use reqwest::{Client, StatusCode};

use crate::{
    config,
    error::{Error, Result},
    types::{AttributeSet, RecommendationsResponse, Track},
};

/// Builds the recommendations query from a validated attribute set.
///
/// Deterministic: the same attributes always produce the same pairs, with
/// the fixed key set the API expects. `limit` carries the normalized
/// playlist length. Encoding of the values is left to the HTTP client.
pub fn build_query_params(attributes: &AttributeSet) -> Vec<(&'static str, String)> {
    vec![
        ("seed_genres", attributes.genre.clone()),
        ("target_acousticness", attributes.acousticness.to_string()),
        ("target_danceability", attributes.danceability.to_string()),
        ("target_energy", attributes.energy.to_string()),
        (
            "target_instrumentalness",
            attributes.instrumentalness.to_string(),
        ),
        ("target_liveness", attributes.liveness.to_string()),
        ("target_speechiness", attributes.speechiness.to_string()),
        ("target_popularity", attributes.popularity.to_string()),
        ("target_valence", attributes.valence.to_string()),
        ("limit", attributes.playlist_length.to_string()),
    ]
}

/// Fetches track recommendations for the given attribute set.
///
/// Issues a bearer-authenticated GET against `/recommendations` and parses
/// the track list. Single attempt, no retry; the flow either gets a full
/// track list or an error.
///
/// # Errors
///
/// - [`Error::Request`] when the endpoint answers with a non-success status.
/// - [`Error::Parse`] when the body lacks the expected track-list shape.
/// - [`Error::Network`] when the request itself fails.
pub async fn get_recommendations(token: &str, attributes: &AttributeSet) -> Result<Vec<Track>> {
    let api_url = format!("{uri}/recommendations", uri = config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&build_query_params(attributes))
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    parse_recommendations_response(status, &body)
}

/// Maps a recommendations endpoint answer onto the track list.
pub fn parse_recommendations_response(status: StatusCode, body: &str) -> Result<Vec<Track>> {
    if !status.is_success() {
        return Err(Error::Request(format!("status code {}", status)));
    }

    let parsed: RecommendationsResponse =
        serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(parsed.tracks)
}
