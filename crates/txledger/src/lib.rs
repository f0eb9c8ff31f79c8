//! txledger — wallet transaction history retrieval and normalization.
//!
//! Fetches an address's normal, internal, ERC-20 and ERC-721 transfers from
//! an Etherscan-style explorer API and flattens the four record shapes into
//! one fixed tabular schema. Read-only; no keys beyond the API key; no
//! signing.

pub mod chain;
pub mod ledger;

pub use chain::fetch::{EtherscanResponse, RawTransaction};
pub use chain::{FetchConfig, FetchError, Fetcher, API_KEY_ENV};
pub use ledger::{
    normalize_all, normalize_records, Category, NormalizedRecord, TransactionType,
};
