//! Analysis engine: loader, enricher, and aggregator for compliance-scan
//! exports. The pipeline is a single linear pass — load the primary and
//! annotations tables, enrich each control row with priority and risk score,
//! then aggregate summaries for the reporter.

pub mod aggregate;
pub mod enrich;
pub mod loader;
