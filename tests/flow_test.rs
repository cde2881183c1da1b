use reqwest::StatusCode;
use sporecli::{
    cli::validate_attributes,
    error::Error,
    management::GenreCatalogManager,
    spotify::{
        auth::parse_token_response,
        genres::parse_genre_seeds_response,
        recommendations::{build_query_params, parse_recommendations_response},
    },
    types::{AttributeInput, Track, TrackArtist},
    view::{ResultsView, ViewState},
};

// Helper function to build raw form input with usable defaults
fn sample_input(genre: &str, length: Option<&str>) -> AttributeInput {
    AttributeInput {
        genre: genre.to_string(),
        acousticness: 0.5,
        danceability: 0.5,
        energy: 0.5,
        instrumentalness: 0.5,
        liveness: 0.5,
        speechiness: 0.5,
        popularity: 50.0,
        valence: 0.5,
        playlist_length: length.map(|l| l.to_string()),
    }
}

// Helper function to build a track with a single credited artist
fn sample_track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
    }
}

#[test]
fn test_validate_attributes_requires_genre() {
    // Empty and whitespace-only genres are rejected before anything else runs
    let result = validate_attributes(&sample_input("", None));
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = validate_attributes(&sample_input("   ", None));
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_validate_attributes_trims_genre() {
    let attributes = validate_attributes(&sample_input("  rock  ", Some("20"))).unwrap();
    assert_eq!(attributes.genre, "rock");
}

#[test]
fn test_validate_attributes_normalizes_length() {
    // In-range entries survive validation
    let attributes = validate_attributes(&sample_input("rock", Some("35"))).unwrap();
    assert_eq!(attributes.playlist_length, 35);

    // Out-of-range and missing entries fall back to the default
    let attributes = validate_attributes(&sample_input("rock", Some("120"))).unwrap();
    assert_eq!(attributes.playlist_length, 20);

    let attributes = validate_attributes(&sample_input("rock", None)).unwrap();
    assert_eq!(attributes.playlist_length, 20);
}

#[test]
fn test_validate_attributes_passes_sliders_through() {
    let mut input = sample_input("rock", Some("20"));
    input.energy = 0.9;
    input.popularity = 75.0;

    let attributes = validate_attributes(&input).unwrap();
    assert_eq!(attributes.energy, 0.9);
    assert_eq!(attributes.popularity, 75.0);
}

#[test]
fn test_build_query_params_is_deterministic() {
    let attributes = validate_attributes(&sample_input("rock", Some("30"))).unwrap();

    // Same attributes produce the same parameter list on every call
    let first = build_query_params(&attributes);
    let second = build_query_params(&attributes);
    assert_eq!(first, second);
}

#[test]
fn test_build_query_params_keys_and_values() {
    let attributes = validate_attributes(&sample_input("rock", Some("999"))).unwrap();
    let params = build_query_params(&attributes);

    let keys: Vec<&str> = params.iter().map(|(key, _)| *key).collect();
    assert_eq!(
        keys,
        vec![
            "seed_genres",
            "target_acousticness",
            "target_danceability",
            "target_energy",
            "target_instrumentalness",
            "target_liveness",
            "target_speechiness",
            "target_popularity",
            "target_valence",
            "limit",
        ]
    );

    assert!(params.contains(&("seed_genres", "rock".to_string())));

    // The limit reflects the normalized length, not the raw entry
    assert!(params.contains(&("limit", "20".to_string())));
}

#[test]
fn test_parse_token_response_rejected_credentials() {
    let result = parse_token_response(StatusCode::UNAUTHORIZED, "");
    assert!(matches!(result, Err(Error::Auth(_))));

    // The failure message names the status code
    let err = parse_token_response(StatusCode::BAD_REQUEST, "").unwrap_err();
    match err {
        Error::Auth(msg) => assert!(msg.contains("400")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_token_response_malformed_body() {
    let result = parse_token_response(StatusCode::OK, r#"{"unexpected":true}"#);
    assert!(matches!(result, Err(Error::Auth(_))));

    let result = parse_token_response(StatusCode::OK, "not json");
    assert!(matches!(result, Err(Error::Auth(_))));
}

#[test]
fn test_parse_token_response_success() {
    let body = r#"{"access_token":"abc123","token_type":"Bearer","expires_in":3600}"#;
    let token = parse_token_response(StatusCode::OK, body).unwrap();

    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_parse_token_response_missing_expiry() {
    // Only the access token is guaranteed; a body without an expiry is still a usable token
    let body = r#"{"access_token":"abc123","token_type":"Bearer"}"#;
    let token = parse_token_response(StatusCode::OK, body).unwrap();

    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.expires_in, 0);
}

#[test]
fn test_parse_recommendations_error_status() {
    let result = parse_recommendations_response(StatusCode::BAD_GATEWAY, "");
    assert!(matches!(result, Err(Error::Request(_))));

    let err = parse_recommendations_response(StatusCode::NOT_FOUND, "").unwrap_err();
    match err {
        Error::Request(msg) => assert!(msg.contains("404")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_recommendations_missing_track_list() {
    // A success status with an unexpected shape is a parse failure, not a request failure
    let result = parse_recommendations_response(StatusCode::OK, r#"{"albums":[]}"#);
    assert!(matches!(result, Err(Error::Parse(_))));

    let result = parse_recommendations_response(StatusCode::OK, "not json");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_parse_recommendations_preserves_order() {
    let body = r#"{
        "tracks": [
            {"name": "First", "artists": [{"name": "Artist A"}]},
            {"name": "Second", "artists": [{"name": "Artist B"}, {"name": "Feature"}]},
            {"name": "Third", "artists": []}
        ]
    }"#;
    let tracks = parse_recommendations_response(StatusCode::OK, body).unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].name, "First");
    assert_eq!(tracks[1].name, "Second");
    assert_eq!(tracks[2].name, "Third");

    // The first credited artist represents the track, an empty credit list shows nothing
    assert_eq!(tracks[0].primary_artist(), "Artist A");
    assert_eq!(tracks[1].primary_artist(), "Artist B");
    assert_eq!(tracks[2].primary_artist(), "");
}

#[test]
fn test_parse_genre_seeds_response() {
    let body = r#"{"genres": ["acoustic", "rock", "jazz"]}"#;
    let genres = parse_genre_seeds_response(StatusCode::OK, body).unwrap();
    assert_eq!(genres, vec!["acoustic", "rock", "jazz"]);

    let result = parse_genre_seeds_response(StatusCode::FORBIDDEN, "");
    assert!(matches!(result, Err(Error::Request(_))));

    let result = parse_genre_seeds_response(StatusCode::OK, r#"{"seeds": []}"#);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_results_view_single_presentation() {
    let tracks = vec![sample_track("One", "A"), sample_track("Two", "B")];
    let mut view = ResultsView::new();
    assert_eq!(view.state(), ViewState::Idle);

    // First presentation opens the view
    assert!(view.present(&tracks));
    assert_eq!(view.state(), ViewState::Open);
    assert!(view.is_open());

    // Presenting again is refused and leaves the existing view open
    assert!(!view.present(&tracks));
    assert_eq!(view.state(), ViewState::Open);

    // Closing is the only way back to idle
    view.close();
    assert_eq!(view.state(), ViewState::Idle);
    assert!(view.present(&tracks));
}

#[test]
fn test_results_view_close_when_idle() {
    // Closing an idle view is harmless
    let mut view = ResultsView::new();
    view.close();
    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
fn test_bundled_catalog() {
    let catalog = GenreCatalogManager::bundled();

    assert!(catalog.count() > 0);
    assert!(catalog.genres().contains(&"rock".to_string()));

    // The bundled copy carries no update timestamp
    assert_eq!(catalog.updated_at(), 0);

    // Suggestions from the full catalog still honor the dropdown cap
    assert!(catalog.suggest("").len() <= 15);
}
