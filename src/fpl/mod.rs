//! FPL domain: wire models, data sources, aggregation and report assembly.

pub mod compute;
pub mod fixtures;
pub mod http;
pub mod report;
pub mod source;
pub mod types;
