//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the
//! Spotify integration layer, the catalog management layer and the console
//! output macros; `main.rs` only parses arguments and dispatches here.
//!
//! ## Commands
//!
//! - [`recommend`] - The submission flow: validate the attribute form,
//!   fetch a client-credentials token, query the recommendations endpoint
//!   and open the results view. One-shot via flags, or a prompt-driven
//!   interactive form with genre suggestions.
//! - [`list_genres`] - Browse the seed-genre catalog or search it the way
//!   the form's suggestion dropdown does (case-insensitive substring,
//!   capped list).
//! - [`update_genres`] - Refresh the cached catalog from the
//!   available-genre-seeds endpoint.
//! - [`info`] - Catalog and configuration status.
//!
//! ## Error Presentation
//!
//! Flow errors are caught at the command boundary and surfaced as a single
//! message: `error!` (exits with code 1) for one-shot commands, `warning!`
//! inside the interactive session so the form stays usable. Length
//! auto-correction is an advisory, not an error.
//!
//! ## Usage
//!
//! ```bash
//! sporecli recommend --genre rock --energy 0.8 --length 30
//! sporecli recommend --interactive
//! sporecli genres --search ro
//! sporecli genres update
//! sporecli info --config
//! ```

mod genres;
mod info;
mod recommend;

pub use genres::list_genres;
pub use genres::update_genres;
pub use info::info;
pub use recommend::recommend;
pub use recommend::validate_attributes;
