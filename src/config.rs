use crate::error::Result;
use url::Url;

/// Which gateway deployment the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
    /// Point the client at an arbitrary base URL (self-hosted proxies,
    /// test servers)
    Custom(String),
}

impl Environment {
    pub fn base_url(&self) -> &str {
        match self {
            Self::Sandbox => "https://api.sandbox.paygate.io",
            Self::Production => "https://api.paygate.io",
            Self::Custom(url) => url,
        }
    }
}

/// Gateway credentials and client settings, consumed when building a
/// [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
    pub timeout_seconds: Option<u64>,
}

impl Config {
    pub fn new<S: Into<String>>(
        environment: Environment,
        merchant_id: S,
        public_key: S,
        private_key: S,
    ) -> Self {
        Self {
            environment,
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            timeout_seconds: None,
        }
    }

    /// Absolute URL for an API path under this merchant
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let full = format!(
            "{}/merchants/{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            self.merchant_id,
            path.trim_start_matches('/'),
        );
        Ok(Url::parse(&full)?)
    }
}
