//! Configuration loading for RxVerify.
//! Everything comes from the environment (a `.env` file is honoured);
//! only the Gemini API key is mandatory.

use std::net::SocketAddr;
use std::path::PathBuf;

use rxverify_verifier::DEFAULT_MATCH_THRESHOLD;

#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key; startup fails without it.
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// CSV with the known-medicine reference list.
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Similarity threshold (0–100) for a name to count as verified.
    pub match_threshold: f64,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_dataset() -> PathBuf {
    PathBuf::from("data/medicines.csv")
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable is not set"))?;

        let gemini_model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

        let dataset_path = std::env::var("RXVERIFY_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_dataset());

        let bind_addr = match std::env::var("RXVERIFY_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => default_bind_addr(),
        };

        let match_threshold = match std::env::var("RXVERIFY_MATCH_THRESHOLD") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model,
            dataset_path,
            bind_addr,
            match_threshold,
        })
    }
}
