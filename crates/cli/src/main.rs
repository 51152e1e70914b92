use anyhow::{anyhow, Context, Result};
use catalog::{Movie, MovieCatalog, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{ServerConfig, DEFAULT_PORT};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Movies - in-memory movie catalog API
#[derive(Parser)]
#[command(name = "movies")]
#[command(about = "HTTP API over an in-memory movie catalog", long_about = None)]
struct Cli {
    /// Path to the JSON movie dataset
    #[arg(short, long, env = "MOVIES_DATA_FILE", default_value = "data/movies.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory with the static front-end
        #[arg(long, env = "MOVIES_STATIC_DIR", default_value = "web")]
        static_dir: PathBuf,

        /// Origin allowed to call the API cross-origin (repeatable).
        /// Replaces the built-in list when given.
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// Print the dataset, optionally filtered by genre
    List {
        /// Genre label (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Print a single movie
    Show {
        /// Movie ID to display
        #[arg(long)]
        id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            static_dir,
            allowed_origins,
        } => {
            let mut config = ServerConfig {
                port,
                data_file: cli.data_file,
                static_dir,
                ..ServerConfig::default()
            };
            if !allowed_origins.is_empty() {
                config.allowed_origins = allowed_origins;
            }
            info!("Allowed origins: {}", config.allowed_origins.join(", "));
            server::serve(config).await?
        }
        Commands::List { genre } => handle_list(&load_catalog(&cli.data_file)?, genre)?,
        Commands::Show { id } => handle_show(&load_catalog(&cli.data_file)?, id)?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<MovieCatalog> {
    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(path).context("Failed to load movie dataset")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'list' command
fn handle_list(catalog: &MovieCatalog, genre: Option<String>) -> Result<()> {
    let movies: Vec<&Movie> = match genre.as_deref() {
        Some(genre) => catalog.by_genre(genre)?,
        None => catalog.all().iter().collect(),
    };

    let header = match &genre {
        Some(genre) => format!("Movies in genre '{}':", genre),
        None => "All movies:".to_string(),
    };
    println!("{}", header.bold().blue());

    for movie in movies {
        println!(
            "{:>4}. {} ({}) [{}] - Rate: {:.1}",
            movie.id.to_string().green(),
            movie.title,
            movie.year,
            movie.genre.join(", "),
            movie.rate
        );
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &MovieCatalog, id: MovieId) -> Result<()> {
    let movie = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    println!("{}", format!("{} ({})", movie.title, movie.year).bold().blue());
    println!("{}ID: {}", "• ".green(), movie.id);
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Duration: {} min", "• ".green(), movie.duration);
    println!("{}Genres: {}", "• ".green(), movie.genre.join(", "));
    println!("{}Rate: {:.1}", "• ".cyan(), movie.rate);
    println!("{}Poster: {}", "• ".cyan(), movie.poster);
    Ok(())
}
