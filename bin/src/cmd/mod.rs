//! CLI subcommand modules.

pub(crate) mod observations;
pub(crate) mod units;
