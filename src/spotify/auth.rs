use reqwest::{Client, StatusCode};

use crate::{
    config::{self, Credentials},
    error::{Error, Result},
    types::Token,
};

/// Acquires access tokens through the OAuth client-credentials exchange.
///
/// The credentials are injected at construction time; nothing is read from
/// ambient state when a token is requested. Tokens are fetched fresh for
/// every submission and never cached, so there is no refresh or expiry
/// handling here.
pub struct TokenFetcher {
    credentials: Credentials,
}

impl TokenFetcher {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Requests an access token from the token endpoint.
    ///
    /// Sends `grant_type=client_credentials` as a form body with
    /// `Authorization: Basic base64(client_id:client_secret)`. A single
    /// attempt is made; there is no retry.
    ///
    /// # Errors
    ///
    /// - [`Error::Auth`] when the endpoint answers with a non-success
    ///   status or a body that is not a usable token.
    /// - [`Error::Network`] when the request itself fails.
    pub async fn request_token(&self) -> Result<Token> {
        let client = Client::new();
        let response = client
            .post(&config::spotify_apitoken_url())
            .header(
                "Authorization",
                format!("Basic {}", self.credentials.basic_token()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_token_response(status, &body)
    }
}

/// Maps a token endpoint answer onto a [`Token`].
///
/// Non-success statuses and unparseable bodies are both authentication
/// failures: either way the flow has no token to continue with.
pub fn parse_token_response(status: StatusCode, body: &str) -> Result<Token> {
    if !status.is_success() {
        return Err(Error::Auth(format!(
            "token request failed with status code {}",
            status
        )));
    }

    serde_json::from_str::<Token>(body)
        .map_err(|e| Error::Auth(format!("invalid token response: {}", e)))
}
