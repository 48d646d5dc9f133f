use clap::{Parser, Subcommand};
use deck::{
    DeckError, FilesystemVault, PREVIEW_EXCERPT_LENGTH, PropertyValue, ViewConfig, color_for, excerpt_with_boundary, gradient_for,
    hash_name, render_vault, resolve_image,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deck", version, about = "Card grids for note vaults")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every note of a vault as a card grid (JSON)
    Grid {
        /// Vault directory
        vault: PathBuf,

        /// View configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Show the fallback color and gradient picked for note names
    Palette {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the preview excerpt of a note
    Excerpt {
        file: PathBuf,

        #[arg(short, long, default_value_t = PREVIEW_EXCERPT_LENGTH)]
        max_length: usize,
    },

    /// Resolve an image property value against a vault
    Resolve {
        /// Property value, e.g. "[[photo.jpg]]"
        value: String,

        #[arg(long)]
        vault: PathBuf,

        /// Path of the note the value belongs to
        #[arg(long, default_value = "")]
        context: String,
    },
}

fn main() -> Result<(), DeckError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Grid { vault, config, pretty } => {
            let config = match config {
                Some(path) => ViewConfig::from_json(&fs::read_to_string(path)?)?,
                None => ViewConfig::default(),
            };
            let grid = render_vault(&vault, config)?;
            let json = if pretty {
                serde_json::to_string_pretty(&grid)?
            } else {
                serde_json::to_string(&grid)?
            };
            println!("{}", json);
        }
        Commands::Palette { names } => {
            for name in names {
                let gradient = gradient_for(&name);
                println!(
                    "{}\t{}\t{}\t{} -> {}",
                    name,
                    hash_name(&name),
                    color_for(&name),
                    gradient.from,
                    gradient.to
                );
            }
        }
        Commands::Excerpt { file, max_length } => {
            let text = fs::read_to_string(&file)?;
            let excerpt = excerpt_with_boundary(&text, max_length);
            log::debug!("Cut '{}' at {:?}", file.display(), excerpt.boundary);
            println!("{}", excerpt.text);
        }
        Commands::Resolve { value, vault, context } => {
            let vault = FilesystemVault::open(&vault)?;
            match resolve_image(&PropertyValue::from(value.as_str()), &context, &vault) {
                Some(address) => println!("{}", address),
                None => {
                    eprintln!("'{}' does not resolve to an image", value);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
