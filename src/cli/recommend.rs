//! The recommendation submission flow.
//!
//! A submission runs validate → token → fetch → display, strictly in that
//! order: an empty genre is rejected before any network call, the token is
//! requested fresh per submission, and nothing is rendered on failure. The
//! interactive mode wraps the same flow in a prompt-driven form with the
//! genre suggestion dropdown; values are retained between rounds.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    config::Credentials,
    error,
    error::{Error, Result},
    info,
    management::GenreCatalogManager,
    spotify::{self, auth::TokenFetcher},
    success,
    types::{AttributeInput, AttributeSet, Track},
    utils::{self, LengthCheck},
    view::ResultsView,
    warning,
};

/// Entry point for the `recommend` command.
///
/// In one-shot mode the flags are the form: the flow runs once, the results
/// view opens and Enter closes it. With `interactive` the form session
/// takes over and the flag values become the initial form state.
pub async fn recommend(input: AttributeInput, interactive: bool) {
    if interactive {
        form_session(input).await;
        return;
    }

    let attributes = match validate_attributes(&input) {
        Ok(attributes) => attributes,
        Err(e) => error!("{}", e),
    };

    let tracks = match request_recommendations(&attributes).await {
        Ok(tracks) => tracks,
        Err(e) => error!("{}", e),
    };

    let mut view = ResultsView::new();
    if view.present(&tracks) {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        wait_for_close(&mut view, &mut lines).await;
    }
}

/// Validates the raw form state into an [`AttributeSet`].
///
/// The genre must be non-empty; this is checked before anything talks to
/// the network. The playlist length is normalized into 1..=50 (default 20)
/// with an advisory when it had to be corrected. Attribute values pass
/// through unchanged; out-of-range targets are the API's problem to reject.
pub fn validate_attributes(input: &AttributeInput) -> Result<AttributeSet> {
    if input.genre.trim().is_empty() {
        return Err(Error::Validation(
            "select a genre before requesting recommendations".to_string(),
        ));
    }

    let (playlist_length, check) =
        utils::normalize_playlist_length(input.playlist_length.as_deref());
    if let Some(advisory) = check.advisory() {
        match check {
            LengthCheck::Missing => info!("{}", advisory),
            _ => warning!("{}", advisory),
        }
    }

    Ok(AttributeSet {
        genre: input.genre.trim().to_string(),
        acousticness: input.acousticness,
        danceability: input.danceability,
        energy: input.energy,
        instrumentalness: input.instrumentalness,
        liveness: input.liveness,
        speechiness: input.speechiness,
        popularity: input.popularity,
        valence: input.valence,
        playlist_length,
    })
}

/// Runs the network half of a submission: fresh token, then the
/// recommendations fetch. Both phases are single attempts.
async fn request_recommendations(attributes: &AttributeSet) -> Result<Vec<Track>> {
    let credentials = Credentials::from_env()?;
    let fetcher = TokenFetcher::new(credentials);

    let pb = utils::progress_spinner("Requesting access token...");
    let token = match fetcher.request_token().await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Fetching recommendations...");
    let tracks =
        match spotify::recommendations::get_recommendations(&token.access_token, attributes).await
        {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

    pb.finish_and_clear();
    Ok(tracks)
}

/// Prompt-driven form session.
///
/// Reads the form top to bottom (genre with suggestions, the eight
/// attributes, the playlist length), submits, and offers another round
/// with the entered values as the new defaults. Submissions are strictly
/// sequential: the next prompt only appears after the current flow has
/// finished and the results view was closed.
async fn form_session(initial: AttributeInput) {
    let catalog = match GenreCatalogManager::load().await {
        Ok(catalog) => catalog,
        Err(_) => GenreCatalogManager::bundled(),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut view = ResultsView::new();
    let mut current = initial;

    info!("Recommendation form. Press Enter to keep the value in brackets.");

    loop {
        current.genre = prompt_genre(&mut lines, &catalog, &current.genre).await;
        current.acousticness =
            prompt_attribute(&mut lines, "acousticness", current.acousticness).await;
        current.danceability =
            prompt_attribute(&mut lines, "danceability", current.danceability).await;
        current.energy = prompt_attribute(&mut lines, "energy", current.energy).await;
        current.instrumentalness =
            prompt_attribute(&mut lines, "instrumentalness", current.instrumentalness).await;
        current.liveness = prompt_attribute(&mut lines, "liveness", current.liveness).await;
        current.speechiness =
            prompt_attribute(&mut lines, "speechiness", current.speechiness).await;
        current.popularity = prompt_attribute(&mut lines, "popularity", current.popularity).await;
        current.valence = prompt_attribute(&mut lines, "valence", current.valence).await;
        current.playlist_length = prompt_length(&mut lines, current.playlist_length.take()).await;

        match validate_attributes(&current) {
            Ok(attributes) => match request_recommendations(&attributes).await {
                Ok(tracks) => {
                    if view.present(&tracks) {
                        wait_for_close(&mut view, &mut lines).await;
                    }
                }
                Err(e) => warning!("{}", e),
            },
            Err(e) => warning!("{}", e),
        }

        if !prompt_yes(&mut lines, "Generate another list? [y/N]: ").await {
            break;
        }
    }
}

async fn wait_for_close(view: &mut ResultsView, lines: &mut Lines<BufReader<Stdin>>) {
    info!("Press Enter to close the list.");
    let _ = lines.next_line().await;
    view.close();
}

/// Genre entry with the suggestion dropdown.
///
/// Typed text filters the catalog; an exact catalog hit or unmatched free
/// text is accepted as-is, a number picks from the last shown suggestions,
/// and partial text re-displays the (capped) dropdown.
async fn prompt_genre(
    lines: &mut Lines<BufReader<Stdin>>,
    catalog: &GenreCatalogManager,
    previous: &str,
) -> String {
    let mut suggestions: Vec<String> = Vec::new();

    loop {
        let label = if previous.is_empty() {
            "genre: ".to_string()
        } else {
            format!("genre [{}]: ", previous)
        };
        let entry = match prompt(lines, &label).await {
            Some(entry) => entry,
            None => return previous.to_string(),
        };
        if entry.is_empty() {
            return previous.to_string();
        }

        if let Ok(pick) = entry.parse::<usize>() {
            if pick >= 1 && pick <= suggestions.len() {
                let genre = suggestions[pick - 1].clone();
                success!("Genre set to: {}", genre);
                return genre;
            }
        }

        let matches = catalog.suggest(&entry);

        if let Some(genre) = matches.iter().find(|g| g.eq_ignore_ascii_case(&entry)) {
            let genre = genre.clone();
            success!("Genre set to: {}", genre);
            return genre;
        }
        if matches.is_empty() {
            success!("Genre set to: {}", entry);
            return entry;
        }

        for (i, genre) in matches.iter().enumerate() {
            println!("  {}. {}", i + 1, genre);
        }
        suggestions = matches;
    }
}

async fn prompt_attribute(
    lines: &mut Lines<BufReader<Stdin>>,
    name: &str,
    current: f64,
) -> f64 {
    loop {
        let entry = match prompt(lines, &format!("{} [{}]: ", name, current)).await {
            Some(entry) => entry,
            None => return current,
        };
        if entry.is_empty() {
            return current;
        }

        match entry.parse::<f64>() {
            // passed through as-is; target ranges are the API's concern
            Ok(value) => return value,
            Err(_) => warning!("Enter a numeric value."),
        }
    }
}

/// Length entry with the original form's entry-time behavior: out-of-range
/// or non-numeric input is corrected to the default right away with an
/// advisory, a valid entry is confirmed.
async fn prompt_length(
    lines: &mut Lines<BufReader<Stdin>>,
    previous: Option<String>,
) -> Option<String> {
    let shown = previous
        .clone()
        .unwrap_or_else(|| utils::DEFAULT_PLAYLIST_LENGTH.to_string());
    let entry = match prompt(lines, &format!("playlist length [{}]: ", shown)).await {
        Some(entry) => entry,
        None => return previous,
    };
    if entry.is_empty() {
        return previous;
    }

    let (value, check) = utils::normalize_playlist_length(Some(&entry));
    match check.advisory() {
        Some(advisory) => {
            warning!("{}", advisory);
            Some(value.to_string())
        }
        None => {
            success!("Playlist length set to: {}", value);
            Some(entry)
        }
    }
}

async fn prompt_yes(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> bool {
    match prompt(lines, label).await {
        Some(entry) => matches!(entry.as_str(), "y" | "Y" | "yes"),
        None => false,
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Option<String> {
    print!("{}", label);
    let _ = std::io::stdout().flush();

    match lines.next_line().await {
        Ok(Some(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}
