use crate::error::{GatewayError, Result};
use crate::search::SearchResults;
use crate::types::{
    AddOn, AddOnList, Address, ApiErrorResponse, CreditCard, Customer, Discount, DiscountList,
    MerchantAccount, SettlementBatchSummary, Subscription, Transaction,
};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;
use std::mem;

/// Where the body bytes come from before the first unpack
#[derive(Debug)]
enum BodySource {
    Transport(reqwest::Response),
    Raw(Vec<u8>),
    Drained,
}

/// One HTTP exchange with the gateway: transport status and headers plus
/// a body buffer populated at most once by [`unpack_body`](Self::unpack_body).
#[derive(Debug)]
pub struct Response {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
    source: BodySource,
    body: Option<Vec<u8>>,
}

impl Response {
    /// Wrap a live transport response. The body stream is not read until
    /// `unpack_body` is called.
    pub fn from_transport(transport: reqwest::Response) -> Self {
        let status = transport.status();
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };

        let mut headers = HashMap::new();
        for (name, value) in transport.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        Self {
            status: status.as_u16(),
            status_text,
            headers,
            source: BodySource::Transport(transport),
            body: None,
        }
    }

    /// Build a response from raw parts, bypassing the transport. The bytes
    /// go through the same gzip detection as a streamed body on unpack.
    pub fn from_parts<S, B>(status: u16, status_text: S, raw: B) -> Self
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        Self {
            status,
            status_text: status_text.into(),
            headers: HashMap::new(),
            source: BodySource::Raw(raw.into()),
            body: None,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The unpacked body, or empty if `unpack_body` has not run yet
    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Populate the body buffer: drain the transport stream once, then
    /// inflate it if it turns out to be gzip-compressed. Idempotent; a
    /// second call never re-reads the transport. Fails only when the
    /// stream itself cannot be read.
    pub async fn unpack_body(&mut self) -> Result<()> {
        if self.body.is_some() {
            return Ok(());
        }

        let raw = match mem::replace(&mut self.source, BodySource::Drained) {
            BodySource::Transport(transport) => transport.bytes().await?.to_vec(),
            BodySource::Raw(raw) => raw,
            BodySource::Drained => Vec::new(),
        };

        self.body = Some(inflate_if_gzip(raw));
        Ok(())
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let body = std::str::from_utf8(self.body())?;
        Ok(quick_xml::de::from_str(body)?)
    }

    pub fn merchant_account(&self) -> Result<MerchantAccount> {
        self.decode()
    }

    pub fn transaction(&self) -> Result<Transaction> {
        self.decode()
    }

    pub fn credit_card(&self) -> Result<CreditCard> {
        self.decode()
    }

    pub fn customer(&self) -> Result<Customer> {
        self.decode()
    }

    pub fn subscription(&self) -> Result<Subscription> {
        self.decode()
    }

    pub fn settlement_batch_summary(&self) -> Result<SettlementBatchSummary> {
        self.decode()
    }

    pub fn address(&self) -> Result<Address> {
        self.decode()
    }

    /// Decode the `<add-ons>` list endpoint, unwrapping the container.
    /// An empty container yields an empty vec, not an error.
    pub fn add_ons(&self) -> Result<Vec<AddOn>> {
        let list: AddOnList = self.decode()?;
        Ok(list.add_ons)
    }

    /// Decode the `<discounts>` list endpoint, unwrapping the container
    pub fn discounts(&self) -> Result<Vec<Discount>> {
        let list: DiscountList = self.decode()?;
        Ok(list.discounts)
    }

    pub fn search_results(&self) -> Result<SearchResults> {
        self.decode()
    }

    /// Classify the exchange. A structured error payload with a non-empty
    /// message wins over the status code; a non-2xx status with no payload
    /// degrades to a status-text error so failures never pass as success.
    /// A body that is not a well-formed error payload is simply "no
    /// structured error found", not a parse error.
    pub fn api_error(&self) -> Option<GatewayError> {
        let payload: ApiErrorResponse = self.decode().unwrap_or_default();
        if !payload.message.is_empty() {
            return Some(GatewayError::new(payload.message, self.status));
        }
        if self.status > 299 {
            return Some(GatewayError::new(self.status_text.clone(), self.status));
        }
        None
    }
}

/// Attempt gzip inflation; bytes that do not inflate are taken to be an
/// uncompressed body. A genuinely corrupt gzip stream is therefore kept
/// as-is rather than reported — the subsequent decode surfaces the
/// garbage instead.
fn inflate_if_gzip(raw: Vec<u8>) -> Vec<u8> {
    let mut decoder = GzDecoder::new(raw.as_slice());
    let mut inflated = Vec::new();
    match decoder.read_to_end(&mut inflated) {
        Ok(_) => inflated,
        Err(_) => raw,
    }
}
