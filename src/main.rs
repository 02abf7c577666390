//! # Blossom CLI
//!
//! Command-line interface for generating flower images.
//!
//! ## Usage
//!
//! ```bash
//! # Save flowers/42/300.png and print a markdown image link
//! blossom generate --seed 42
//!
//! # Pick a random seed, custom size, explicit output file
//! blossom generate --random --size 512 --out flower.png
//!
//! # Print a data URL instead of writing a file
//! blossom generate --seed 7 --data-url
//!
//! # Keep the random seed that was picked so the flower can be regenerated
//! blossom generate --random --save-config settings.json
//! blossom generate --config settings.json
//!
//! # Show the parameters a seed produces
//! blossom params --seed 42
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blossom::{BlossomError, Params, Seed, config::FlowerConfig};

/// Blossom - procedural flower images from a seed
#[derive(Parser, Debug)]
#[command(name = "blossom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a flower image
    Generate {
        /// Seed (integer). Omit to use the configured or a random seed
        #[arg(long)]
        seed: Option<String>,

        /// Always pick a random seed
        #[arg(long, conflicts_with = "seed")]
        random: bool,

        /// Image side length in pixels (defaults to the configured size, or 300)
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Settings file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the PNG to this file instead of <folder>/<seed>/<size>.png
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Root folder for saved images
        #[arg(long, value_name = "DIR")]
        folder: Option<PathBuf>,

        /// Print a base64 data URL instead of writing a file
        #[arg(long, conflicts_with_all = ["out", "folder"])]
        data_url: bool,

        /// Write the settings used, with the seed pinned, to this file (JSON)
        #[arg(long, value_name = "FILE")]
        save_config: Option<PathBuf>,
    },

    /// Print the parameters generated for a seed as JSON
    Params {
        /// Seed (integer)
        #[arg(long)]
        seed: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blossom=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BlossomError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            seed,
            random,
            size,
            config,
            out,
            folder,
            data_url,
            save_config,
        } => {
            let mut settings = match config {
                Some(path) => FlowerConfig::load(&path)?,
                None => FlowerConfig::default(),
            };
            if let Some(folder) = folder {
                settings.images_folder = folder;
            }

            let size = size.unwrap_or(i64::from(settings.size));
            if size <= 0 {
                return Err(BlossomError::InvalidSize { size });
            }
            settings.size = u32::try_from(size).map_err(|_| BlossomError::InvalidSize { size })?;

            let seed = match seed {
                Some(text) => text.parse::<Seed>()?,
                None if random => Seed::random(),
                None => settings.resolve_seed(),
            };

            if let Some(path) = save_config {
                settings.pinned(seed).save(&path)?;
                info!(%seed, path = %path.display(), "Settings were saved");
            }

            if data_url {
                println!("{}", blossom::generate_flower_data_url(size, seed)?);
                return Ok(());
            }

            let path = match out {
                Some(path) => path,
                None => {
                    let path = settings.image_path(seed);
                    if path.exists() {
                        info!(%seed, path = %path.display(), "Flower image already exists");
                        println!("![Flower Image]({})", path.display());
                        return Ok(());
                    }
                    path
                }
            };

            let png = blossom::generate_flower_image(size, seed)?;
            save_png(&path, &png)?;
            info!(%seed, size, path = %path.display(), "Flower image was saved");
            println!("![Flower Image]({})", path.display());
        }

        Commands::Params { seed } => {
            let seed = seed.parse::<Seed>()?;
            let params = Params::generate(seed);
            debug!(%seed, %params, "Generated params");
            let json = serde_json::to_string_pretty(&params)
                .map_err(|e| BlossomError::Encoding(format!("params JSON: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Write PNG bytes, creating parent folders as needed.
fn save_png(path: &PathBuf, png: &[u8]) -> Result<(), BlossomError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, png)?;
    Ok(())
}
