//! FRED API client implementation.

use crate::{
    Result,
    error::FredError,
    query::ObservationsQuery,
    transport::{HttpTransport, Transport},
    types::{Observation, ObservationsResponse},
};
use std::{env, time::Duration};
use tracing::error;

/// Endpoint for series observations.
pub const FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// FRED API client.
#[derive(Debug, Clone)]
pub struct FredClient<T = HttpTransport> {
    transport: T,
    api_key: String,
    base_url: String,
}

impl FredClient {
    /// Create a new FRED client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }

    /// Create a new FRED client from the `FRED_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set, or if a
    /// `.env` file exists but cannot be read or parsed.
    pub fn from_env() -> Result<Self> {
        load_dotenv(dotenvy::dotenv().map(drop))?;

        let api_key = env::var("FRED_API_KEY").map_err(|_| FredError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Start configuring a client with a custom base URL or timeout.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> FredClientBuilder {
        FredClientBuilder {
            api_key: api_key.into(),
            base_url: FRED_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl<T: Transport> FredClient<T> {
    /// Create a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            base_url: FRED_BASE_URL.to_string(),
        }
    }

    /// Send requests to `base_url` instead of the public endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the observations of a series.
    ///
    /// Observations are returned in the order the API sent them. A response
    /// without an `observations` field yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (logged before returning), if
    /// the body is not JSON, or if any observation value is not a number.
    pub fn observations(&self, query: &ObservationsQuery) -> Result<Vec<Observation>> {
        let params = query.to_params(&self.api_key);

        let body = self
            .transport
            .get(&self.base_url, &params)
            .inspect_err(|e| {
                error!(
                    series_id = query.series_id(),
                    "Error fetching data from FRED API: {e}"
                );
            })?;

        let response: ObservationsResponse = serde_json::from_str(&body)?;
        response.into_observations()
    }
}

/// Accept a missing `.env` file; surface any other load failure.
fn load_dotenv(loaded: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match loaded {
        Err(e) if !e.not_found() => Err(e.into()),
        _ => Ok(()),
    }
}

/// Builder for a [`FredClient`] using the default HTTP transport.
#[derive(Debug, Clone)]
pub struct FredClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl FredClientBuilder {
    /// Override the observations endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FredClient> {
        let transport = match self.timeout {
            Some(timeout) => HttpTransport::with_timeout(timeout)?,
            None => HttpTransport::new(),
        };
        Ok(FredClient::with_transport(self.api_key, transport).with_base_url(self.base_url))
    }
}

/// Fetch observations with a default client.
///
/// # Errors
///
/// See [`FredClient::observations`].
pub fn fetch_observations(
    api_key: impl Into<String>,
    query: &ObservationsQuery,
) -> Result<Vec<Observation>> {
    FredClient::new(api_key).observations(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        transport::QueryParams,
        types::{AggregationMethod, Units},
    };
    use std::sync::Mutex;

    const TWO_OBSERVATIONS: &str = r#"{"observations": [
        {"date": "2020-01-01", "value": "100"},
        {"date": "2020-02-01", "value": "105"}
    ]}"#;

    /// Replays a fixed body and records every request.
    #[derive(Debug, Default)]
    struct StubTransport {
        body: String,
        requests: Mutex<Vec<(String, QueryParams)>>,
    }

    impl StubTransport {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::default(),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str, query: &QueryParams) -> Result<String> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), query.clone()));
            Ok(self.body.clone())
        }
    }

    #[test]
    fn test_fetch_success() {
        let client =
            FredClient::with_transport("dummy_api_key", StubTransport::new(TWO_OBSERVATIONS));
        let query = ObservationsQuery::new("GDP")
            .observation_start("2020-01-01")
            .observation_end("2020-12-31")
            .units(Units::Levels)
            .frequency("m")
            .aggregation_method(AggregationMethod::Average);

        let data = client.observations(&query).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].date, "2020-01-01");
        assert_eq!(data[0].value, 100.0);
        assert_eq!(data[1].date, "2020-02-01");
        assert_eq!(data[1].value, 105.0);
        assert_eq!(client.transport.request_count(), 1);
    }

    #[test]
    fn test_request_targets_base_url() {
        let client = FredClient::with_transport("key", StubTransport::new("{}"));
        client.observations(&ObservationsQuery::new("GDP")).unwrap();

        let requests = client.transport.requests.lock().unwrap();
        let (url, params) = &requests[0];
        assert_eq!(url, FRED_BASE_URL);
        assert!(params.contains(&("api_key", "key".to_string())));
        assert!(params.contains(&("frequency", String::new())));
    }

    #[test]
    fn test_missing_observations_returns_empty() {
        let client = FredClient::with_transport("key", StubTransport::new(r#"{"count": 0}"#));
        let data = client.observations(&ObservationsQuery::new("GDP")).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_invalid_units_sends_nothing() {
        let client = FredClient::with_transport("key", StubTransport::new(TWO_OBSERVATIONS));

        let result = "invalid_unit"
            .parse::<Units>()
            .map(|units| ObservationsQuery::new("GDP").units(units))
            .and_then(|query| client.observations(&query));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid units"));
        assert_eq!(client.transport.request_count(), 0);
    }

    #[test]
    fn test_invalid_aggregation_method_sends_nothing() {
        let client = FredClient::with_transport("key", StubTransport::new(TWO_OBSERVATIONS));

        let result = "invalid_method"
            .parse::<AggregationMethod>()
            .map(|method| ObservationsQuery::new("GDP").aggregation_method(method))
            .and_then(|query| client.observations(&query));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid aggregation_method"));
        assert_eq!(client.transport.request_count(), 0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let client = FredClient::with_transport("key", StubTransport::new(TWO_OBSERVATIONS));
        let query = ObservationsQuery::new("GDP");

        let first = client.observations(&query).unwrap();
        let second = client.observations(&query).unwrap();

        assert_eq!(first, second);
        let requests = client.transport.requests.lock().unwrap();
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let body = r#"{"observations": [{"date": "2020-01-01", "value": "abc"}]}"#;
        let client = FredClient::with_transport("key", StubTransport::new(body));
        let err = client
            .observations(&ObservationsQuery::new("GDP"))
            .unwrap_err();
        assert!(matches!(err, FredError::InvalidValue { .. }));
    }

    #[test]
    fn test_non_json_body_fails() {
        let client = FredClient::with_transport("key", StubTransport::new("<html>"));
        let err = client
            .observations(&ObservationsQuery::new("GDP"))
            .unwrap_err();
        assert!(matches!(err, FredError::Json(_)));
    }

    #[test]
    fn test_missing_dotenv_file_is_ignored() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, ".env");
        assert!(load_dotenv(Err(dotenvy::Error::Io(missing))).is_ok());
        assert!(load_dotenv(Ok(())).is_ok());
    }

    #[test]
    fn test_malformed_dotenv_file_is_an_error() {
        let parse = dotenvy::Error::LineParse("FRED_API_KEY 'abc".to_string(), 13);
        let err = load_dotenv(Err(parse)).unwrap_err();
        assert!(matches!(err, FredError::Env(_)));
    }

    #[test]
    fn test_builder_overrides_base_url() {
        let client = FredClient::builder("key")
            .base_url("http://localhost:8080/obs")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/obs");
    }
}
