//! Data types for FRED API requests and responses.

use crate::{Result, error::FredError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Server-side transformation applied to observation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Levels, no transformation (`lin`).
    #[default]
    Levels,
    /// Change (`chg`).
    Change,
    /// Change from a year ago (`ch1`).
    ChangeFromYearAgo,
    /// Percent change (`pch`).
    PercentChange,
    /// Percent change from a year ago (`pc1`).
    PercentChangeFromYearAgo,
    /// Compounded annual rate of change (`pca`).
    CompoundedAnnualRate,
    /// Continuously compounded rate of change (`cch`).
    ContinuouslyCompoundedRate,
    /// Continuously compounded annual rate of change (`cca`).
    ContinuouslyCompoundedAnnualRate,
    /// Natural log (`log`).
    NaturalLog,
}

impl Units {
    /// Every accepted unit code, in API documentation order.
    pub const ALL: [Self; 9] = [
        Self::Levels,
        Self::Change,
        Self::ChangeFromYearAgo,
        Self::PercentChange,
        Self::PercentChangeFromYearAgo,
        Self::CompoundedAnnualRate,
        Self::ContinuouslyCompoundedRate,
        Self::ContinuouslyCompoundedAnnualRate,
        Self::NaturalLog,
    ];

    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Levels => "lin",
            Self::Change => "chg",
            Self::ChangeFromYearAgo => "ch1",
            Self::PercentChange => "pch",
            Self::PercentChangeFromYearAgo => "pc1",
            Self::CompoundedAnnualRate => "pca",
            Self::ContinuouslyCompoundedRate => "cch",
            Self::ContinuouslyCompoundedAnnualRate => "cca",
            Self::NaturalLog => "log",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Levels => "Levels (no transformation)",
            Self::Change => "Change",
            Self::ChangeFromYearAgo => "Change from Year Ago",
            Self::PercentChange => "Percent Change",
            Self::PercentChangeFromYearAgo => "Percent Change from Year Ago",
            Self::CompoundedAnnualRate => "Compounded Annual Rate of Change",
            Self::ContinuouslyCompoundedRate => "Continuously Compounded Rate of Change",
            Self::ContinuouslyCompoundedAnnualRate => {
                "Continuously Compounded Annual Rate of Change"
            }
            Self::NaturalLog => "Natural Log",
        }
    }
}

impl FromStr for Units {
    type Err = FredError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == s).ok_or_else(|| {
            let allowed = Self::ALL.map(|u| u.as_str());
            FredError::invalid_argument("units", s, &allowed)
        })
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How observations are combined when aggregating to a lower frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggregationMethod {
    /// Average (`avg`).
    #[default]
    Average,
    /// Sum (`sum`).
    Sum,
    /// End of period (`eop`).
    EndOfPeriod,
}

impl AggregationMethod {
    /// Every accepted aggregation code.
    pub const ALL: [Self; 3] = [Self::Average, Self::Sum, Self::EndOfPeriod];

    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::Sum => "sum",
            Self::EndOfPeriod => "eop",
        }
    }
}

impl FromStr for AggregationMethod {
    type Err = FredError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s).ok_or_else(|| {
            let allowed = Self::ALL.map(|m| m.as_str());
            FredError::invalid_argument("aggregation_method", s, &allowed)
        })
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frequency to aggregate a series down to.
///
/// Codes are not validated locally; anything the known variants don't cover
/// is kept as [`Frequency::Other`] and sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Daily (`d`).
    Daily,
    /// Weekly (`w`).
    Weekly,
    /// Biweekly (`bw`).
    Biweekly,
    /// Monthly (`m`).
    Monthly,
    /// Quarterly (`q`).
    Quarterly,
    /// Semiannual (`sa`).
    Semiannual,
    /// Annual (`a`).
    Annual,
    /// Weekly, ending Friday (`wef`).
    WeeklyEndingFriday,
    /// Weekly, ending Thursday (`weth`).
    WeeklyEndingThursday,
    /// Weekly, ending Wednesday (`wew`).
    WeeklyEndingWednesday,
    /// Weekly, ending Tuesday (`wetu`).
    WeeklyEndingTuesday,
    /// Weekly, ending Monday (`wem`).
    WeeklyEndingMonday,
    /// Weekly, ending Sunday (`wesu`).
    WeeklyEndingSunday,
    /// Weekly, ending Saturday (`wesa`).
    WeeklyEndingSaturday,
    /// Biweekly, ending Wednesday (`bwew`).
    BiweeklyEndingWednesday,
    /// Biweekly, ending Monday (`bwem`).
    BiweeklyEndingMonday,
    /// Any other code, passed through verbatim.
    Other(String),
}

impl Frequency {
    const KNOWN: [Self; 16] = [
        Self::Daily,
        Self::Weekly,
        Self::Biweekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Semiannual,
        Self::Annual,
        Self::WeeklyEndingFriday,
        Self::WeeklyEndingThursday,
        Self::WeeklyEndingWednesday,
        Self::WeeklyEndingTuesday,
        Self::WeeklyEndingMonday,
        Self::WeeklyEndingSunday,
        Self::WeeklyEndingSaturday,
        Self::BiweeklyEndingWednesday,
        Self::BiweeklyEndingMonday,
    ];

    /// Get the API parameter value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Biweekly => "bw",
            Self::Monthly => "m",
            Self::Quarterly => "q",
            Self::Semiannual => "sa",
            Self::Annual => "a",
            Self::WeeklyEndingFriday => "wef",
            Self::WeeklyEndingThursday => "weth",
            Self::WeeklyEndingWednesday => "wew",
            Self::WeeklyEndingTuesday => "wetu",
            Self::WeeklyEndingMonday => "wem",
            Self::WeeklyEndingSunday => "wesu",
            Self::WeeklyEndingSaturday => "wesa",
            Self::BiweeklyEndingWednesday => "bwew",
            Self::BiweeklyEndingMonday => "bwem",
            Self::Other(code) => code,
        }
    }
}

impl From<&str> for Frequency {
    fn from(code: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|f| f.as_str() == code)
            .unwrap_or_else(|| Self::Other(code.to_string()))
    }
}

impl From<String> for Frequency {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl FromStr for Frequency {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (date, value) sample of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date (YYYY-MM-DD), exactly as returned by the API.
    pub date: String,
    /// Observation value.
    pub value: f64,
}

impl Observation {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Raw observation as it appears on the wire; values are numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawObservation {
    date: String,
    value: String,
}

impl TryFrom<RawObservation> for Observation {
    type Error = FredError;

    fn try_from(raw: RawObservation) -> Result<Self> {
        match raw.value.trim().parse::<f64>() {
            Ok(value) => Ok(Self {
                date: raw.date,
                value,
            }),
            Err(source) => Err(FredError::InvalidValue {
                date: raw.date,
                value: raw.value,
                source,
            }),
        }
    }
}

/// Body of a `series/observations` response. Fields other than
/// `observations` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<RawObservation>,
}

impl ObservationsResponse {
    /// Convert every raw observation, failing on the first non-numeric value.
    pub(crate) fn into_observations(self) -> Result<Vec<Observation>> {
        self.observations
            .into_iter()
            .map(Observation::try_from)
            .collect()
    }
}
