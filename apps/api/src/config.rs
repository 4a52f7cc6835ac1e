use anyhow::{Context, Result};

const DEFAULT_MEME_API_BASE: &str = "https://meme-api.com/gimme";
const DEFAULT_LEXICON_PATH: &str = "data/vader_lexicon.txt";
const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// Application configuration loaded from environment variables.
/// Every variable has a default; a `.env` file is honored if present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub meme_api_base: String,
    pub lexicon_path: String,
    pub lexicon_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            meme_api_base: std::env::var("MEME_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MEME_API_BASE.to_string()),
            lexicon_path: std::env::var("LEXICON_PATH")
                .unwrap_or_else(|_| DEFAULT_LEXICON_PATH.to_string()),
            lexicon_url: std::env::var("LEXICON_URL")
                .unwrap_or_else(|_| DEFAULT_LEXICON_URL.to_string()),
        })
    }
}
