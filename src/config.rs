use anyhow::{Context, Result};
use clap::Parser;
use std::env;

pub const DEFAULT_PORT: u16 = 1234;
const DEFAULT_SEED_PATH: &str = "./data/movies.json";
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:8080,http://localhost:3000,https://myapp.com";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: String,
    pub allowed_origins: Vec<String>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory movie catalog REST API")]
pub struct Args {
    /// Host to bind to (overrides MOVIE_API_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides MOVIE_API_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to the JSON seed file (overrides MOVIE_API_SEED_PATH)
    #[arg(long)]
    pub seed_path: Option<String>,

    /// Comma-separated cross-origin allow-list (overrides MOVIE_API_ALLOWED_ORIGINS)
    #[arg(long)]
    pub allowed_origins: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("MOVIE_API_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("MOVIE_API_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing MOVIE_API_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err).context("reading MOVIE_API_PORT"),
        };
        let env_seed =
            env::var("MOVIE_API_SEED_PATH").unwrap_or_else(|_| DEFAULT_SEED_PATH.into());
        let env_origins = env::var("MOVIE_API_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.into());

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            seed_path: args.seed_path.unwrap_or(env_seed),
            allowed_origins: parse_origins(&args.allowed_origins.unwrap_or(env_origins)),
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://a.com, http://b.com ,,https://c.com");
        assert_eq!(
            origins,
            vec!["http://a.com", "http://b.com", "https://c.com"]
        );
    }

    #[test]
    fn parse_origins_of_empty_string_is_empty() {
        assert!(parse_origins("").is_empty());
    }
}
