use sporecli::utils::*;

// Helper function to build an owned genre list
fn genre_list(genres: &[&str]) -> Vec<String> {
    genres.iter().map(|g| g.to_string()).collect()
}

#[test]
fn test_normalize_playlist_length_in_range() {
    // In-range values pass through unchanged
    assert_eq!(
        normalize_playlist_length(Some("1")),
        (1, LengthCheck::Accepted)
    );
    assert_eq!(
        normalize_playlist_length(Some("20")),
        (20, LengthCheck::Accepted)
    );
    assert_eq!(
        normalize_playlist_length(Some("50")),
        (50, LengthCheck::Accepted)
    );

    // Surrounding whitespace is ignored
    assert_eq!(
        normalize_playlist_length(Some(" 35 ")),
        (35, LengthCheck::Accepted)
    );
}

#[test]
fn test_normalize_playlist_length_out_of_range() {
    // Everything outside 1..=50 resets to the default of 20
    assert_eq!(
        normalize_playlist_length(Some("0")),
        (20, LengthCheck::TooSmall)
    );
    assert_eq!(
        normalize_playlist_length(Some("-3")),
        (20, LengthCheck::TooSmall)
    );
    assert_eq!(
        normalize_playlist_length(Some("51")),
        (20, LengthCheck::TooLarge)
    );
    assert_eq!(
        normalize_playlist_length(Some("1000")),
        (20, LengthCheck::TooLarge)
    );
}

#[test]
fn test_normalize_playlist_length_unusable_input() {
    // Absent and non-numeric input also resets to the default
    assert_eq!(normalize_playlist_length(None), (20, LengthCheck::Missing));
    assert_eq!(
        normalize_playlist_length(Some("")),
        (20, LengthCheck::Missing)
    );
    assert_eq!(
        normalize_playlist_length(Some("   ")),
        (20, LengthCheck::Missing)
    );
    assert_eq!(
        normalize_playlist_length(Some("abc")),
        (20, LengthCheck::NotANumber)
    );
    assert_eq!(
        normalize_playlist_length(Some("12.5")),
        (20, LengthCheck::NotANumber)
    );
}

#[test]
fn test_length_check_advisories() {
    // Accepted values carry no advisory, corrected ones do
    assert!(LengthCheck::Accepted.advisory().is_none());
    assert!(LengthCheck::Missing.advisory().is_some());
    assert!(LengthCheck::NotANumber.advisory().is_some());

    // The out-of-range advisories name the violated bound
    assert!(LengthCheck::TooLarge.advisory().unwrap().contains("above 50"));
    assert!(LengthCheck::TooSmall.advisory().unwrap().contains("below 1"));
}

#[test]
fn test_filter_genre_suggestions_case_insensitive() {
    let genres = genre_list(&["rock", "Jazz", "Rockabilly", "Pop"]);

    // Substring match ignores case and preserves catalog order
    let matches = filter_genre_suggestions(&genres, "ro");
    assert_eq!(matches, vec!["rock".to_string(), "Rockabilly".to_string()]);

    // Uppercase input matches the same entries
    let matches = filter_genre_suggestions(&genres, "RO");
    assert_eq!(matches, vec!["rock".to_string(), "Rockabilly".to_string()]);
}

#[test]
fn test_filter_genre_suggestions_matches_anywhere() {
    let genres = genre_list(&["hip-hop", "trip-hop", "house"]);

    // The needle may sit in the middle of an entry
    let matches = filter_genre_suggestions(&genres, "hop");
    assert_eq!(matches, vec!["hip-hop".to_string(), "trip-hop".to_string()]);
}

#[test]
fn test_filter_genre_suggestions_no_match() {
    let genres = genre_list(&["rock", "jazz", "pop"]);
    let matches = filter_genre_suggestions(&genres, "polka");
    assert!(matches.is_empty());
}

#[test]
fn test_filter_genre_suggestions_empty_input_matches_all() {
    let genres = genre_list(&["rock", "jazz", "pop"]);
    let matches = filter_genre_suggestions(&genres, "");
    assert_eq!(matches, genres);
}

#[test]
fn test_filter_genre_suggestions_cap() {
    // 20 matching entries are capped to the dropdown size, front of the list first
    let genres: Vec<String> = (0..20).map(|i| format!("genre-{}", i)).collect();
    let matches = filter_genre_suggestions(&genres, "genre");

    assert_eq!(matches.len(), MAX_GENRE_SUGGESTIONS);
    assert_eq!(matches[0], "genre-0");
    assert_eq!(matches[14], "genre-14");
}
