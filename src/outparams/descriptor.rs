//! Output parameter descriptor
//!
//! A [ParameterDescriptor] documents one quantity the simulation can report: what it
//! means, which unit it is expressed in, whether it is produced once per body segment,
//! and whether it belongs to the standard or the extra output set.

use serde::Serialize;
use std::fmt;

/// Output set a parameter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputSet {
    /// Always reported
    Standard,
    /// Reported only when extended output is requested
    Extra,
}

impl fmt::Display for OutputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSet::Standard => write!(f, "standard"),
            OutputSet::Extra => write!(f, "extra"),
        }
    }
}

/// Metadata for a single output parameter
///
/// The identifier is the key under which the registry stores the descriptor, so it
/// is skipped when serializing. The remaining fields keep the names used by the
/// JOS-3 result tables (`ex_output` for the extra flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    #[serde(skip)]
    pub identifier: &'static str,
    pub meaning: &'static str,
    pub unit: &'static str,
    /// Per-segment expansion axis, `None` for whole-body scalars
    pub suffix: Option<&'static str>,
    #[serde(rename = "ex_output")]
    pub is_extra: bool,
}

impl ParameterDescriptor {
    pub const fn new(
        identifier: &'static str,
        meaning: &'static str,
        unit: &'static str,
        suffix: Option<&'static str>,
        is_extra: bool,
    ) -> Self {
        ParameterDescriptor {
            identifier,
            meaning,
            unit,
            suffix,
            is_extra,
        }
    }

    /// True when the value is produced once per body segment
    pub fn is_per_segment(&self) -> bool {
        self.suffix.is_some()
    }

    pub fn output_set(&self) -> OutputSet {
        if self.is_extra {
            OutputSet::Extra
        } else {
            OutputSet::Standard
        }
    }

    /// Names under which the simulation reports this parameter
    ///
    /// Scalars are reported under their identifier. Per-segment parameters are
    /// expanded to `<identifier>_<segment>`, one name per segment, in the order given.
    pub fn output_names(&self, segments: &[&str]) -> Vec<String> {
        if !self.is_per_segment() {
            return vec![self.identifier.to_string()];
        }
        segments
            .iter()
            .map(|segment| format!("{}_{}", self.identifier, segment))
            .collect()
    }

    /// Checks the static-data invariants: meaning and unit present, suffix not blank
    pub fn is_well_formed(&self) -> bool {
        !self.identifier.is_empty()
            && !self.meaning.is_empty()
            && !self.unit.is_empty()
            && self.suffix.map_or(true, |s| !s.is_empty())
    }
}
