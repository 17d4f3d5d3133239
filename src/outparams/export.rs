//! JSON export of a registry
//!
//! The export is an object keyed by identifier, in sorted order, whose values carry the
//! `meaning`, `unit`, `suffix` and `ex_output` fields of each descriptor. This is the
//! shape downstream result builders read when deciding what to report.

use super::registry::ParameterRegistry;

pub fn to_json(registry: &ParameterRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry)
}

pub fn to_value(registry: &ParameterRegistry) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(registry)
}
