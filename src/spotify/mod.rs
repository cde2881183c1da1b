//! # Spotify Integration Module
//!
//! This module is the integration layer between the CLI and the Spotify Web
//! API. It covers the three endpoints the tool talks to: the OAuth token
//! endpoint, the recommendations endpoint, and the available-genre-seeds
//! endpoint.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials exchange)
//!     ├── Recommendations (query construction + fetch)
//!     └── Genre Seeds (catalog refresh)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - obtains access tokens through the OAuth 2.0 client-credentials
//! grant. The application credentials are handed to the fetcher at
//! construction; a token is requested fresh for every submission and
//! discarded afterwards. There is no user login, no refresh token and no
//! token cache.
//!
//! [`recommendations`] - turns a validated attribute set into the
//! `/recommendations` query (fixed parameter names, `limit` from the
//! normalized playlist length) and fetches the track list with a bearer
//! token.
//!
//! [`genres`] - fetches the seed-genre list backing the suggestion catalog.
//!
//! ## Request Semantics
//!
//! Every call is a single attempt: a failed request surfaces its error to
//! the caller immediately, with no retry, backoff or timeout layered on
//! top of the transport. Responses are split into a status check and a
//! body parse, and each module exposes its `parse_*_response` step as a
//! pure function over `(StatusCode, &str)` so the mapping onto the error
//! taxonomy is testable without any network:
//!
//! - token endpoint: non-success status or malformed body → authentication
//!   error
//! - recommendations/seeds: non-success status → request error, malformed
//!   body → parse error

pub mod auth;
pub mod genres;
pub mod recommendations;
