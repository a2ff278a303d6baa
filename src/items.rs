//! Per item-type handlers.

pub mod report;

pub const REPORT: &str = "Report";
pub const SEMANTIC_MODEL: &str = "SemanticModel";
