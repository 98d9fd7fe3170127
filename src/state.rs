use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::FromRef;

use crate::config::Config;
use crate::store::CertificateStore;

/// How long an issued OAuth CSRF state stays valid. Abandoned logins expire
/// out of the map instead of accumulating.
const OAUTH_STATE_TTL: Duration = Duration::from_secs(600);

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    /// Shared client for all outbound provider calls.
    pub http_client: reqwest::Client,

    pub certificates: CertificateStore,

    /// CSRF states issued on login, mapped to their expiry deadline.
    /// In-memory and single-process; a restart invalidates pending logins.
    oauth_states: Arc<Mutex<HashMap<String, Instant>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let certificates = CertificateStore::new(&config.certificates_dir);

        Self {
            config,
            http_client: reqwest::Client::new(),
            certificates,
            oauth_states: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Records a CSRF state token generated on login redirect.
    /// Expired entries are swept on each insert.
    pub fn store_oauth_state(&self, state: &str) {
        let mut states = self.oauth_states.lock().unwrap();
        let now = Instant::now();
        states.retain(|_, expires_at| *expires_at > now);
        states.insert(state.to_owned(), now + OAUTH_STATE_TTL);
    }

    /// Consumes a CSRF state token on callback (single use).
    /// Returns false if the state was never issued or has expired.
    pub fn consume_oauth_state(&self, state: &str) -> bool {
        match self.oauth_states.lock().unwrap().remove(state) {
            Some(expires_at) => expires_at > Instant::now(),
            None => false,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for CertificateStore {
    fn from_ref(state: &AppState) -> Self {
        state.certificates.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(Config {
            port: 0,
            public_base_url: "http://localhost:0".to_string(),
            certificates_dir: "certificates".to_string(),
            linkedin_client_id: "client_id".to_string(),
            linkedin_client_secret: "client_secret".to_string(),
            linkedin_redirect_uri: "http://localhost:3000/linkedin/callback".to_string(),
            oauth_base_url: "http://localhost:0".to_string(),
            api_base_url: "http://localhost:0".to_string(),
            rust_log: "error".to_string(),
        })
    }

    #[test]
    fn oauth_state_is_single_use() {
        let state = test_state();
        state.store_oauth_state("abc123");

        assert!(state.consume_oauth_state("abc123"));
        assert!(!state.consume_oauth_state("abc123"));
    }

    #[test]
    fn unknown_oauth_state_is_rejected() {
        let state = test_state();
        assert!(!state.consume_oauth_state("never-issued"));
    }

    #[test]
    fn expired_oauth_state_is_rejected() {
        let state = test_state();

        // A deadline of "now" is already past by the time it is checked.
        state
            .oauth_states
            .lock()
            .unwrap()
            .insert("stale".to_string(), Instant::now());

        assert!(!state.consume_oauth_state("stale"));
    }
}
