//! Spotify Recommendation CLI Library
//!
//! This library turns a set of musical attributes into a Spotify track
//! recommendation list: it validates the attribute form, obtains an API
//! token through the client-credentials exchange, queries the
//! recommendations endpoint and renders the result behind an explicitly
//! stated open/closed results view. A genre suggestion catalog backs the
//! form's genre field.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration, credentials and environment handling
//! - `error` - Typed error taxonomy for the submission flow
//! - `management` - Genre catalog loading and caching
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Validation and filtering helpers
//! - `view` - Results view with explicit open/closed state
//!
//! # Example
//!
//! ```
//! use sporecli::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     if let Err(e) = config::load_env().await {
//!         eprintln!("{}", e);
//!     }
//!     // Dispatch to CLI functions...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Press Enter to close the list.");
/// info!("Genre catalog: cached ({} genres)", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully
/// or a form value has been accepted.
///
/// # Example
///
/// ```
/// success!("Here's your list of recommendations!");
/// success!("Updated genre catalog ({} genres).", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Immediately terminates the program with exit code 1 after printing.
/// Used at the one-shot command boundary where a failed submission ends
/// the run; the interactive session uses [`warning!`] instead so the form
/// stays alive.
///
/// # Example
///
/// ```
/// error!("Authentication failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues and advisories: corrected playlist lengths,
/// a results view that is still open, flow errors inside the interactive
/// session.
///
/// # Example
///
/// ```
/// warning!("Close the existing list before generating a new one.");
/// warning!("Playlist length above 50 is not allowed. Falling back to the default of 20.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
