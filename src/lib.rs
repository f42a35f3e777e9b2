//! Paygate - client library for the Paygate XML-over-HTTP payments API
//!
//! This crate serializes request objects to XML, issues HTTP calls,
//! decompresses and decodes XML responses into typed structures, and
//! surfaces API-reported errors as typed error values. Every hard problem
//! (authentication, idempotency, rate limiting, consistency) is owned by
//! the remote gateway; nothing is cached, retried, or logged here.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod client;
pub mod response;
pub mod search;

// Re-export main types for convenience
pub use client::{Client, Method};
pub use config::{Config, Environment};
pub use error::{ApiError, GatewayError, InvalidResponse, PaygateError, ResponseError, Result};
pub use response::Response;
pub use search::{
    IdList, MultiField, RangeField, SearchField, SearchQuery, SearchResults, TextField,
    TimeRangeField, TIMESTAMP_FORMAT,
};
pub use types::{
    AddOn, AddOnList, Address, ApiErrorResponse, CreditCard, CreditCardList, Customer, Discount,
    DiscountList, MerchantAccount, SettlementBatchSummary, SettlementRecord, SettlementRecordList,
    Subscription, Transaction,
};
