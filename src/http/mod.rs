//! HTTP client module
//!
//! Provides the HTTP client and rate limiter used by endpoint fetchers.
//!
//! # Features
//!
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Status Mapping**: 4xx/5xx responses become `Error::HttpStatus`
//! - **Single Attempt**: no retries; failures surface to the paginator

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
