//! Configuration management for the recommendation CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Spotify API credentials are the
//! only required configuration; the endpoint URLs have fixed defaults that
//! can be overridden for development setups.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs)

use std::{env, path::PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{Error, Result};

/// Default base URL for the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL of the OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";

/// Spotify application credentials for the client-credentials exchange.
///
/// Held as an opaque pair and passed explicitly into the token fetcher at
/// construction time. The secret never appears in any output; the type has
/// no `Debug` implementation on purpose.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Reads the credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the missing variable when either
    /// `SPOTIFY_API_AUTH_CLIENT_ID` or `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// is not set.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var(CLIENT_ID_VAR)
            .map_err(|_| Error::Config(format!("{} must be set", CLIENT_ID_VAR)))?;
        let client_secret = env::var(CLIENT_SECRET_VAR)
            .map_err(|_| Error::Config(format!("{} must be set", CLIENT_SECRET_VAR)))?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Returns the base64 payload for the `Authorization: Basic` header,
    /// encoding `client_id:client_secret` with the standard alphabet.
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sporecli/.env`. This allows users to store
/// credentials without hardcoding sensitive values. When no `.env` file
/// exists the process environment is used as-is.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sporecli/.env`
/// - macOS: `~/Library/Application Support/sporecli/.env`
/// - Windows: `%LOCALAPPDATA%/sporecli/.env`
///
/// # Errors
///
/// Returns [`Error::Config`] if the parent directory cannot be created or
/// an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Config(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

/// Returns the application's local data directory (`<data_local_dir>/sporecli`).
///
/// Falls back to the current directory when the platform directory cannot
/// be determined.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporecli");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, defaulting to
/// `https://api.spotify.com/v1` when unset.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// `https://accounts.spotify.com/api/token` when unset.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Reports whether both credential variables are present, without exposing
/// their values.
pub fn credentials_configured() -> bool {
    env::var(CLIENT_ID_VAR).is_ok() && env::var(CLIENT_SECRET_VAR).is_ok()
}
