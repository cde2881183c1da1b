use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token obtained through the client-credentials exchange.
///
/// Lives for a single submission; never persisted. Only `access_token` is
/// guaranteed by the endpoint; a missing expiry defaults to 0.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Raw form state as collected from flags or interactive prompts.
///
/// Nothing is validated yet: the genre may be empty and the playlist
/// length is whatever the user typed.
#[derive(Debug, Clone)]
pub struct AttributeInput {
    pub genre: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub popularity: f64,
    pub valence: f64,
    pub playlist_length: Option<String>,
}

/// Validated attribute set ready for query construction.
///
/// Built exclusively through validation, so `genre` is non-empty and
/// `playlist_length` is always within 1..=50.
#[derive(Debug, Clone)]
pub struct AttributeSet {
    pub genre: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub popularity: f64,
    pub valence: f64,
    pub playlist_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

impl Track {
    /// Name of the primary (first-listed) artist, empty when the API
    /// returned no artists for the track.
    pub fn primary_artist(&self) -> String {
        self.artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default()
    }
}

/// Shared shape of the bundled catalog file and the available-genre-seeds
/// endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSeedsResponse {
    pub genres: Vec<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub position: usize,
    pub name: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
}
