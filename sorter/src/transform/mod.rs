//! Transformation module.
//!
//! This module turns a parsed table into the tier report:
//! - Filter: keep active patrons
//! - Grouper: stable sort by tier and format grouped names
//! - Pipeline: file in, file out

pub mod filter;
pub mod grouper;
pub mod pipeline;

pub use filter::active_patrons;
pub use grouper::{format_report, group_by_tier, sort_by_tier};
pub use pipeline::*;
