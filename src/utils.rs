use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Playlist length used whenever the requested length is unusable.
pub const DEFAULT_PLAYLIST_LENGTH: u32 = 20;
pub const MIN_PLAYLIST_LENGTH: u32 = 1;
pub const MAX_PLAYLIST_LENGTH: u32 = 50;

/// Maximum number of entries shown in the genre suggestion dropdown.
pub const MAX_GENRE_SUGGESTIONS: usize = 15;

/// Outcome of playlist-length normalization.
///
/// `Accepted` means the input was in range and passed through unchanged;
/// every other variant means the value was reset to the default and carries
/// the advisory to show for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    Accepted,
    Missing,
    NotANumber,
    TooSmall,
    TooLarge,
}

impl LengthCheck {
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            LengthCheck::Accepted => None,
            LengthCheck::Missing => Some("No playlist length given, using the default of 20."),
            LengthCheck::NotANumber => {
                Some("Playlist length must be a number. Falling back to the default of 20.")
            }
            LengthCheck::TooSmall => {
                Some("Playlist length below 1 is not allowed. Falling back to the default of 20.")
            }
            LengthCheck::TooLarge => {
                Some("Playlist length above 50 is not allowed. Falling back to the default of 20.")
            }
        }
    }
}

/// Coerces a raw playlist-length entry into the allowed 1..=50 range.
///
/// Absent, non-numeric and out-of-range inputs all normalize to
/// [`DEFAULT_PLAYLIST_LENGTH`]; the returned [`LengthCheck`] states which
/// rule fired so the caller can surface the matching advisory.
pub fn normalize_playlist_length(raw: Option<&str>) -> (u32, LengthCheck) {
    let entry = match raw.map(str::trim) {
        None | Some("") => return (DEFAULT_PLAYLIST_LENGTH, LengthCheck::Missing),
        Some(entry) => entry,
    };

    match entry.parse::<i64>() {
        Ok(n) if n < MIN_PLAYLIST_LENGTH as i64 => (DEFAULT_PLAYLIST_LENGTH, LengthCheck::TooSmall),
        Ok(n) if n > MAX_PLAYLIST_LENGTH as i64 => (DEFAULT_PLAYLIST_LENGTH, LengthCheck::TooLarge),
        Ok(n) => (n as u32, LengthCheck::Accepted),
        Err(_) => (DEFAULT_PLAYLIST_LENGTH, LengthCheck::NotANumber),
    }
}

/// Filters the genre catalog by case-insensitive substring match.
///
/// Catalog order is preserved and the result is capped to the first
/// [`MAX_GENRE_SUGGESTIONS`] matches. An empty input matches everything.
pub fn filter_genre_suggestions(genres: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    genres
        .iter()
        .filter(|genre| genre.to_lowercase().contains(&needle))
        .take(MAX_GENRE_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Spinner shown while a network phase is running.
pub fn progress_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
