//! # jos3-outparams
//!
//! Output parameter catalogue for the JOS-3 thermoregulation model.
//!
//! The catalogue names every quantity the simulation can report, together with
//! its meaning, unit, per-segment suffix convention and whether it belongs to the
//! standard or the extra output set. The simulation itself lives elsewhere and only
//! reads from here.
//!
//! ## Layout
//!
//! - [outparams::descriptor]: one entry of the catalogue
//! - [outparams::catalogue]: the built-in entries and the shared [ALL_OUT_PARAMS] registry
//! - [outparams::registry]: immutable identifier to descriptor mapping
//! - [outparams::docs]: plain text reference rendering
//! - [outparams::config]: rendering knobs layered over embedded defaults
//! - [outparams::export]: JSON export for downstream consumers

pub mod outparams;

pub use outparams::catalogue::ALL_OUT_PARAMS;
pub use outparams::docs::show_outparam_docs;
