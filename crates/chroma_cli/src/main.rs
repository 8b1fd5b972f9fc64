//! Chroma CLI
//!
//! Compile accent color overlay archives without the mobile front-end.
//!
//! - `chroma init`: scaffold a chroma.toml
//! - `chroma build`: compile from chroma.toml or from command line flags
//! - `chroma palette`: print the colors derived from a seed

mod config;
mod project;

use anyhow::{Context, Result};
use chroma_color::{generate_tones, is_light, on_color, validate_and_normalize};
use chroma_overlay::documents::{ColorResources, LightPalette};
use chroma_overlay::{compile, Component, ComponentFlags, ThemeRequest, DEFAULT_THEME_NAME};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::ChromaConfig;

/// Accent color overlay compiler
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(about = "Compile accent color overlay archives")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a chroma.toml in a new or existing directory
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Package identifier of the overlay
        #[arg(long)]
        package: String,

        /// Seed color
        #[arg(long, default_value = "#6200EE")]
        seed: String,

        /// Theme display name
        #[arg(long, default_value = DEFAULT_THEME_NAME)]
        name: String,
    },

    /// Compile an overlay archive
    Build {
        /// Project directory or chroma.toml (ignored when --seed is given)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Seed color; skips chroma.toml entirely
        #[arg(long, requires = "package")]
        seed: Option<String>,

        /// Package identifier (with --seed)
        #[arg(long)]
        package: Option<String>,

        /// Theme display name
        #[arg(long)]
        name: Option<String>,

        /// Enable a component, may be repeated (with --seed)
        #[arg(long = "component", value_name = "COMPONENT")]
        components: Vec<Component>,

        /// Output archive path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the palette derived from a seed color
    Palette {
        /// Seed color
        seed: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init {
            path,
            package,
            seed,
            name,
        } => project::create_project(&path, &package, &seed, &name),
        Commands::Build {
            path,
            seed,
            package,
            name,
            components,
            output,
        } => {
            let (request, default_output) = match seed {
                Some(seed) => {
                    let package = package.context("--package is required with --seed")?;
                    let flags = components
                        .into_iter()
                        .fold(ComponentFlags::default(), |flags, c| flags.with(c, true));
                    let output = PathBuf::from(format!("{package}.zip"));
                    (ThemeRequest::new(seed, package).components(flags), output)
                }
                None => {
                    let config = ChromaConfig::load_from_dir(&path)?;
                    let root = if path.is_file() {
                        path.parent().unwrap_or(Path::new(".")).to_path_buf()
                    } else {
                        path.clone()
                    };
                    (config.to_request(), config.output_path(&root))
                }
            };
            let request = match name {
                Some(name) => request.theme_name(name),
                None => request,
            };
            build(&request, &output.unwrap_or(default_output))
        }
        Commands::Palette { seed } => palette(&seed),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn build(request: &ThemeRequest, output: &Path) -> Result<()> {
    let bytes = compile(request).context("Failed to compile overlay")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, &bytes).with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        path = %output.display(),
        bytes = bytes.len(),
        "wrote overlay archive"
    );
    Ok(())
}

fn palette(seed: &str) -> Result<()> {
    let seed = validate_and_normalize(seed)?;
    let color = seed.color();

    println!("seed      {seed}");
    println!(
        "scheme    {} (on-color {})",
        if is_light(color) { "light" } else { "dark" },
        on_color(color)
    );

    println!();
    println!("tones");
    for (stop, tone) in generate_tones(seed).iter() {
        println!("  {stop:>4}  {tone}");
    }

    println!();
    println!("light resources");
    for entry in LightPalette::derive(seed, &ComponentFlags::default()).entries() {
        println!("  {:<30}{}", entry.name, entry.color);
    }
    Ok(())
}
