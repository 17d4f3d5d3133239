//! Parameter registry
//!
//! An immutable mapping from parameter identifier to [ParameterDescriptor]. Entries are
//! kept in lexicographic identifier order so that enumeration is deterministic.
//!
//! There is no way to mutate a registry once it is built. Callers that need a variant
//! (tests, custom catalogues) build a new one with [ParameterRegistry::from_entries] or
//! derive one from an existing registry with [ParameterRegistry::with_entries], and pass
//! it explicitly wherever a registry is taken as a parameter.

use super::descriptor::{OutputSet, ParameterDescriptor};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur while building a registry from caller-supplied entries
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The identifier is already present
    DuplicateIdentifier(String),
    /// Missing identifier, meaning or unit, or a blank suffix
    MalformedEntry(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateIdentifier(id) => {
                write!(f, "Parameter '{id}' is already registered")
            }
            RegistryError::MalformedEntry(id) => write!(f, "Parameter '{id}' is malformed"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry of output parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterRegistry {
    entries: BTreeMap<&'static str, ParameterDescriptor>,
}

impl ParameterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ParameterRegistry {
            entries: BTreeMap::new(),
        }
    }

    /// Build a registry from a static table
    ///
    /// A later entry with the same identifier replaces an earlier one. Tables are
    /// checked for duplicates and malformed entries by the test suite, not here.
    pub fn from_static(table: &[ParameterDescriptor]) -> Self {
        let entries = table.iter().map(|d| (d.identifier, *d)).collect();
        ParameterRegistry { entries }
    }

    /// Build a registry from caller-supplied entries, rejecting duplicates and malformed entries
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ParameterDescriptor>,
    {
        Self::new().with_entries(entries)
    }

    /// Return a new registry holding this registry's entries plus `entries`
    ///
    /// `self` is left untouched. Identifiers already present are rejected.
    pub fn with_entries<I>(&self, entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ParameterDescriptor>,
    {
        let mut next = self.clone();
        for descriptor in entries {
            next.insert_checked(descriptor)?;
        }
        Ok(next)
    }

    fn insert_checked(&mut self, descriptor: ParameterDescriptor) -> Result<(), RegistryError> {
        if !descriptor.is_well_formed() {
            tracing::warn!(identifier = descriptor.identifier, "rejected malformed parameter");
            return Err(RegistryError::MalformedEntry(
                descriptor.identifier.to_string(),
            ));
        }
        if self.entries.contains_key(descriptor.identifier) {
            tracing::warn!(identifier = descriptor.identifier, "rejected duplicate parameter");
            return Err(RegistryError::DuplicateIdentifier(
                descriptor.identifier.to_string(),
            ));
        }
        self.entries.insert(descriptor.identifier, descriptor);
        Ok(())
    }

    /// Look up a parameter by identifier
    ///
    /// Unknown identifiers yield `None`; callers decide what a missing entry means.
    pub fn get(&self, identifier: &str) -> Option<&ParameterDescriptor> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// All identifiers, sorted
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// All descriptors, sorted by identifier
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors of one output set, sorted by identifier
    pub fn in_set(&self, set: OutputSet) -> impl Iterator<Item = &ParameterDescriptor> {
        self.iter().filter(move |d| d.output_set() == set)
    }

    pub fn standard(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.in_set(OutputSet::Standard)
    }

    pub fn extra(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.in_set(OutputSet::Extra)
    }

    /// Parameters to report for a run
    ///
    /// Standard parameters are always selected; extra ones only when `extended` is set.
    pub fn selected(&self, extended: bool) -> impl Iterator<Item = &ParameterDescriptor> {
        self.iter().filter(move |d| extended || !d.is_extra)
    }
}

impl<'a> IntoIterator for &'a ParameterRegistry {
    type Item = &'a ParameterDescriptor;
    type IntoIter = std::collections::btree_map::Values<'a, &'static str, ParameterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
