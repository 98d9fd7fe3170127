// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Minimum percentage of the total score required to pass the quiz.
pub const PASSING_SCORE_PERCENTAGE: f64 = 60.0;

/// Upper bound for incoming JSON bodies (1 MB).
pub const MAX_JSON_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,

    /// Absolute base used when building certificate download URLs.
    pub public_base_url: String,

    /// Directory holding generated certificate PDFs.
    pub certificates_dir: String,

    pub linkedin_client_id: String,
    pub linkedin_client_secret: String,
    pub linkedin_redirect_uri: String,

    /// Base of the provider's authorization and token endpoints.
    /// Overridable so tests can point the service at a stub provider.
    pub oauth_base_url: String,

    /// Base of the provider's identity and content-publishing endpoints.
    pub api_base_url: String,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port: u16 = env::var("PORT")
            .expect("PORT must be set")
            .parse()
            .expect("PORT must be a valid port number");

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let certificates_dir = env::var("CERTIFICATES_DIR")
            .unwrap_or_else(|_| "certificates".to_string());

        let linkedin_client_id = env::var("LINKEDIN_CLIENT_ID")
            .expect("LINKEDIN_CLIENT_ID must be set");

        let linkedin_client_secret = env::var("LINKEDIN_CLIENT_SECRET")
            .expect("LINKEDIN_CLIENT_SECRET must be set");

        let linkedin_redirect_uri = env::var("LINKEDIN_REDIRECT_URI")
            .expect("LINKEDIN_REDIRECT_URI must be set");

        let oauth_base_url = env::var("LINKEDIN_OAUTH_BASE_URL")
            .unwrap_or_else(|_| "https://www.linkedin.com".to_string());

        let api_base_url = env::var("LINKEDIN_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.linkedin.com".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            port,
            public_base_url,
            certificates_dir,
            linkedin_client_id,
            linkedin_client_secret,
            linkedin_redirect_uri,
            oauth_base_url,
            api_base_url,
            rust_log,
        }
    }
}
