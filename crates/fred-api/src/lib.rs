//! Blocking client for the [FRED](https://fred.stlouisfed.org/) series
//! observations API.
//!
//! One request in, one ordered list of `(date, value)` observations out.
//! There is no retrying, paging, caching or persistence.
//!
//! # Usage
//!
//! ```rust,no_run
//! use fred_api::{AggregationMethod, FredClient, ObservationsQuery, Units};
//!
//! fn main() -> fred_api::Result<()> {
//!     fred_api::logging::init();
//!
//!     let client = FredClient::from_env()?;
//!     let query = ObservationsQuery::new("GDP")
//!         .observation_start("2020-01-01")
//!         .units(Units::PercentChange)
//!         .frequency("a")
//!         .aggregation_method(AggregationMethod::EndOfPeriod);
//!
//!     for obs in client.observations(&query)? {
//!         println!("{} {}", obs.date, obs.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FRED_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FRED_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
pub mod logging;
mod query;
mod transport;
mod types;

pub use client::{FRED_BASE_URL, FredClient, FredClientBuilder, fetch_observations};
pub use error::FredError;
pub use query::{DEFAULT_OBSERVATION_END, DEFAULT_OBSERVATION_START, MAX_LIMIT, ObservationsQuery};
pub use transport::{HttpTransport, QueryParams, Transport};
pub use types::*;

/// Result type for FRED operations.
pub type Result<T> = std::result::Result<T, FredError>;
