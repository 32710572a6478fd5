//! Query parameters for the `series/observations` endpoint.

use crate::{
    transport::QueryParams,
    types::{AggregationMethod, Frequency, Units},
};
use chrono::NaiveDate;

/// Earliest observation date the API accepts; the default start.
pub const DEFAULT_OBSERVATION_START: &str = "1776-07-04";

/// Latest observation date the API accepts; the default end.
pub const DEFAULT_OBSERVATION_END: &str = "9999-12-31";

/// Largest page the API will return, and the default limit.
pub const MAX_LIMIT: u32 = 100_000;

/// Parameters for a single observations request.
///
/// Dates and `limit` are sent as given; the API rejects malformed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationsQuery {
    series_id: String,
    observation_start: String,
    observation_end: String,
    limit: u32,
    units: Option<Units>,
    frequency: Option<Frequency>,
    aggregation_method: AggregationMethod,
}

impl ObservationsQuery {
    /// Query every observation of `series_id` with default settings.
    #[must_use]
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            observation_start: DEFAULT_OBSERVATION_START.to_string(),
            observation_end: DEFAULT_OBSERVATION_END.to_string(),
            limit: MAX_LIMIT,
            units: Some(Units::default()),
            frequency: None,
            aggregation_method: AggregationMethod::default(),
        }
    }

    /// Set the start of the observation period (YYYY-MM-DD).
    #[must_use]
    pub fn observation_start(mut self, date: impl Into<String>) -> Self {
        self.observation_start = date.into();
        self
    }

    /// Set the end of the observation period (YYYY-MM-DD).
    #[must_use]
    pub fn observation_end(mut self, date: impl Into<String>) -> Self {
        self.observation_end = date.into();
        self
    }

    /// Set the start of the observation period from a date.
    #[must_use]
    pub fn start_date(self, date: NaiveDate) -> Self {
        self.observation_start(date.format("%Y-%m-%d").to_string())
    }

    /// Set the end of the observation period from a date.
    #[must_use]
    pub fn end_date(self, date: NaiveDate) -> Self {
        self.observation_end(date.format("%Y-%m-%d").to_string())
    }

    /// Set the maximum number of observations (1-100000).
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the units transformation. `None` leaves the parameter out so the
    /// API applies its own default.
    #[must_use]
    pub fn units(mut self, units: impl Into<Option<Units>>) -> Self {
        self.units = units.into();
        self
    }

    /// Aggregate to a lower frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: impl Into<Frequency>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Set the aggregation method used with [`Self::frequency`].
    #[must_use]
    pub fn aggregation_method(mut self, method: AggregationMethod) -> Self {
        self.aggregation_method = method;
        self
    }

    /// The series being queried.
    #[must_use]
    pub fn series_id(&self) -> &str {
        &self.series_id
    }

    /// Build the ordered query string pairs for this request.
    ///
    /// `frequency` is always present; an unset frequency is sent as an
    /// empty string.
    pub(crate) fn to_params(&self, api_key: &str) -> QueryParams {
        let mut params = vec![
            ("series_id", self.series_id.clone()),
            ("api_key", api_key.to_string()),
            ("file_type", "json".to_string()),
            ("observation_start", self.observation_start.clone()),
            ("observation_end", self.observation_end.clone()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(units) = self.units {
            params.push(("units", units.as_str().to_string()));
        }
        params.push((
            "frequency",
            self.frequency
                .as_ref()
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
        ));
        params.push(("aggregation_method", self.aggregation_method.as_str().to_string()));
        params
    }
}
