//! Explorer API client and raw record types.

pub(crate) mod fetch;

pub use fetch::{FetchConfig, FetchError, Fetcher, API_KEY_ENV};
