//! Build script for the Spotify Recommendation CLI.
//!
//! Copies the configuration template and the bundled genre catalog into the
//! user's local data directory so both are available in the place the
//! application looks for them after installation:
//!
//! - Linux: `~/.local/share/sporecli/`
//! - macOS: `~/Library/Application Support/sporecli/`
//! - Windows: `%LOCALAPPDATA%/sporecli/`
//!
//! The `.env.example` template is refreshed on every build. The catalog
//! seed at `cache/genres.json` is only written when missing, so a catalog
//! refreshed via `genres update` survives rebuilds. Missing source files
//! produce warnings instead of failing the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the templates change
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=genres.json");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");
    let catalog_path = manifest_dir.join("genres.json");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sporecli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    // Seed the catalog cache, but never clobber an updated one
    let catalog_dest = out_dir.join("cache/genres.json");
    if catalog_path.is_file() {
        if !catalog_dest.exists() {
            fs::create_dir_all(out_dir.join("cache"))?;
            let contents = fs::read_to_string(&catalog_path)?;
            fs::write(catalog_dest, contents)?;
        }
    } else {
        println!(
            "cargo:warning=genres.json not found at {}",
            catalog_path.display()
        );
    }

    Ok(())
}
