use crate::cli::token::TokenStore;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: u64 = 60;

// Define the global arguments
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub timeout: Option<Duration>,
    pub host: String,
    pub tokens: TokenStore,
}

impl GlobalArgs {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT)),
            host: String::new(),
            tokens: TokenStore::default(),
        }
    }

    /// `0` disables the timeout
    pub const fn set_timeout(&mut self, seconds: u64) {
        self.timeout = if seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(seconds))
        };
    }

    pub fn set_host(&mut self, host: &str, tokens: TokenStore) {
        self.host = host.to_string();
        self.tokens = tokens;
    }
}
