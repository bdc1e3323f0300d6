//! # adposting - SEEK job ad posting API client
//!
//! A Rust client for the SEEK job advertisement posting REST API. The library
//! exposes typed advertisement entities and value objects validated against
//! the service's documented field constraints, maps them to the flat wire
//! representation the service expects, and manages OAuth2 client-credentials
//! token acquisition and caching so callers never handle authentication
//! themselves.
//!
//! ## Features
//!
//! - Typed, validated advertisement entities; invalid field values fail at
//!   construction, before anything reaches the network
//! - OAuth2 client-credentials grant with token caching in a pluggable store
//!   (file-backed or TTL-cache-backed)
//! - Typed errors for every documented HTTP failure status
//!
//! ## Basic Usage
//!
//! ```no_run
//! use adposting::{Client, Config};
//!
//! fn main() -> Result<(), adposting::Error> {
//!     let client = Client::new(Config::new("client-id", "client-secret"));
//!
//!     // Retrieve an advertisement; the client acquires and caches a bearer
//!     // token as needed.
//!     let advertisement = client.advertisements().retrieve("advertisement-id")?;
//!     println!("{}", advertisement.job_title());
//!     Ok(())
//! }
//! ```
//!
//! ## Posting an advertisement
//!
//! ```no_run
//! use adposting::enums::*;
//! use adposting::values::*;
//! use adposting::{Advertisement, Client, Config};
//!
//! fn main() -> Result<(), adposting::Error> {
//!     let advertisement = Advertisement::new(
//!         Some("my-correlation-id".to_string()),
//!         ThirdParties::new("advertiser-1".to_string(), None)?,
//!         AdvertisementType::Classic,
//!         "Senior Software Engineer".to_string(),
//!         Location::new(LocationCode::Melbourne, None),
//!         SubClassification::DevelopersProgrammers,
//!         WorkType::FullTime,
//!         Salary::new(SalaryType::AnnualPackage, 120000.0, 140000.0, None)?,
//!         "Build the platform that powers our hiring products.".to_string(),
//!         "We are looking for a senior engineer to join the team.".to_string(),
//!         Recruiter::new("Jane Doe".to_string(), "jane@example.com".to_string(), None)?,
//!     )?;
//!
//!     let client = Client::new(Config::new("client-id", "client-secret"));
//!     let posted = client.advertisements().create(&advertisement)?;
//!     println!("posted as {:?}", posted.id());
//!     Ok(())
//! }
//! ```
//!
//! ## Token stores
//!
//! ```no_run
//! use adposting::token::{CacheStore, MemoryCache};
//! use adposting::{Client, Config};
//!
//! let store = CacheStore::new(MemoryCache::new());
//! let client = Client::with_store(Config::new("client-id", "client-secret"), store);
//! ```

pub mod advertisement;
pub mod api;
pub mod client;
pub mod enums;
pub mod error;
pub mod token;
pub mod values;

mod wire;

// Re-export main types for convenience
pub use advertisement::Advertisement;
pub use api::{AccessToken, Advertisements, Authorisation};
pub use client::{Client, Config};
pub use error::{Error, Result};
pub use token::{Cache, CacheStore, FileStore, MemoryCache, TokenStore};
