//! Main module for the output parameter catalogue

pub mod catalogue;
pub mod config;
pub mod descriptor;
pub mod docs;
pub mod export;
pub mod registry;

pub use descriptor::{OutputSet, ParameterDescriptor};
pub use registry::{ParameterRegistry, RegistryError};
