//! Observations command implementation.

use anyhow::Result;
use clap::ValueEnum;
use fred_api::{AggregationMethod, FredClient, Observation, ObservationsQuery, Units};
use std::fmt::Write as _;
use tracing::debug;

/// How fetched observations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned two-column table
    Text,
    /// JSON array of {date, value}
    Json,
    /// `date,value` rows with a header
    Csv,
}

/// Arguments of the `observations` subcommand.
#[derive(Debug)]
pub(crate) struct ObservationsArgs {
    pub(crate) series_id: String,
    pub(crate) api_key: Option<String>,
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
    pub(crate) limit: u32,
    pub(crate) units: Option<Units>,
    pub(crate) frequency: Option<String>,
    pub(crate) aggregation_method: AggregationMethod,
    pub(crate) format: OutputFormat,
}

impl ObservationsArgs {
    fn query(&self) -> ObservationsQuery {
        let mut query = ObservationsQuery::new(&self.series_id)
            .limit(self.limit)
            .units(self.units)
            .aggregation_method(self.aggregation_method);
        if let Some(start) = &self.start {
            query = query.observation_start(start.as_str());
        }
        if let Some(end) = &self.end {
            query = query.observation_end(end.as_str());
        }
        if let Some(frequency) = &self.frequency {
            query = query.frequency(frequency.as_str());
        }
        query
    }
}

/// Parse `--units`. An empty value is not validated and leaves the
/// parameter out of the request.
pub(crate) fn parse_units(code: &str) -> Result<Option<Units>> {
    if code.is_empty() {
        return Ok(None);
    }
    Ok(Some(code.parse::<Units>()?))
}

/// Fetch a series and print it to stdout.
pub(crate) fn fetch(args: ObservationsArgs) -> Result<()> {
    let client = match &args.api_key {
        Some(key) => FredClient::new(key.as_str()),
        None => FredClient::from_env()?,
    };

    let observations = client.observations(&args.query())?;
    debug!(count = observations.len(), "Received observations");

    print!("{}", render(&args.series_id, &observations, args.format)?);
    Ok(())
}

/// Format observations for display.
fn render(series_id: &str, observations: &[Observation], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Series: {series_id} ({} observations)", observations.len())?;
            writeln!(out)?;
            writeln!(out, "{:<12} {:>16}", "Date", "Value")?;
            writeln!(out, "{}", "─".repeat(29))?;
            for obs in observations {
                writeln!(out, "{:<12} {:>16.4}", obs.date, obs.value)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(observations)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "date,value")?;
            for obs in observations {
                writeln!(out, "{},{}", obs.date, obs.value)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Observation> {
        vec![
            Observation {
                date: "2020-01-01".to_string(),
                value: 100.0,
            },
            Observation {
                date: "2020-02-01".to_string(),
                value: 105.5,
            },
        ]
    }

    fn args() -> ObservationsArgs {
        ObservationsArgs {
            series_id: "GDP".to_string(),
            api_key: None,
            start: None,
            end: None,
            limit: 100_000,
            units: Some(Units::Levels),
            frequency: None,
            aggregation_method: AggregationMethod::Average,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_render_csv() {
        let out = render("GDP", &sample(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "date,value\n2020-01-01,100\n2020-02-01,105.5\n");
    }

    #[test]
    fn test_render_json() {
        let out = render("GDP", &sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<Observation> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_render_text() {
        let out = render("GDP", &sample(), OutputFormat::Text).unwrap();
        assert!(out.starts_with("Series: GDP (2 observations)"));
        assert!(out.contains("2020-02-01"));
        assert!(out.contains("105.5000"));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("pch").unwrap(), Some(Units::PercentChange));
        assert!(parse_units("bogus").is_err());
    }

    #[test]
    fn test_empty_units_is_left_out() {
        assert_eq!(parse_units("").unwrap(), None);
        let args = ObservationsArgs {
            units: None,
            ..args()
        };
        assert_eq!(args.query(), ObservationsQuery::new("GDP").units(None));
    }

    #[test]
    fn test_query_uses_defaults_when_unset() {
        assert_eq!(args().query(), ObservationsQuery::new("GDP"));
    }

    #[test]
    fn test_query_applies_overrides() {
        let args = ObservationsArgs {
            start: Some("2020-01-01".to_string()),
            frequency: Some("q".to_string()),
            units: Some(Units::PercentChange),
            ..args()
        };
        let expected = ObservationsQuery::new("GDP")
            .observation_start("2020-01-01")
            .units(Units::PercentChange)
            .frequency("q");
        assert_eq!(args.query(), expected);
    }
}
