use crate::config::Config;
use crate::error::{PaygateError, Result};
use crate::response::Response;
use crate::search::{SearchQuery, SearchResults};
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE};
use std::time::Duration;

pub use reqwest::Method;

const API_VERSION: &str = "4";

/// HTTP client for the gateway API
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a new client with configuration
    pub fn new(config: Config) -> Result<Self> {
        let timeout = config.timeout_seconds.unwrap_or(30);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self { http, config })
    }

    /// Issue one API call and hand back the unpacked response.
    ///
    /// Classification stays with the caller: endpoint wrappers check
    /// [`Response::api_error`] and then decode the shape they expect.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response> {
        let url = self.config.url_for(path)?;

        let mut request = self
            .http
            .request(method, url)
            .basic_auth(&self.config.public_key, Some(&self.config.private_key))
            .header(ACCEPT, "application/xml")
            .header(ACCEPT_ENCODING, "gzip")
            .header(CONTENT_TYPE, "application/xml")
            .header("x-apiversion", API_VERSION);

        if let Some(body) = body {
            request = request.body(body);
        }

        let transport = request.send().await?;
        let mut response = Response::from_transport(transport);
        response.unpack_body().await?;
        Ok(response)
    }

    /// Run a search endpoint: serialize the query, POST it, classify the
    /// exchange, decode the id page. A body that is neither an error
    /// payload nor a result page is reported as an invalid response with
    /// the offending exchange attached.
    pub async fn search(&self, path: &str, query: &SearchQuery) -> Result<SearchResults> {
        let body = query.to_xml()?;
        let response = self.execute(Method::POST, path, Some(body)).await?;

        if let Some(err) = response.api_error() {
            return Err(err.into());
        }

        match response.search_results() {
            Ok(results) => Ok(results),
            Err(_) => Err(PaygateError::invalid_response(response)),
        }
    }
}
