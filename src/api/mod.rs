//! # Country Data Access
//!
//! The HTTP client for the REST Countries region endpoint and the record
//! types it decodes into.

pub mod client;
pub mod types;

pub use client::{ApiError, CountrySource, RestCountriesClient, fetch_and_sort};
pub use types::{Country, CountryName, Currency, Flags, NativeName};
