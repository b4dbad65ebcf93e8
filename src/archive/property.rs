//! In-memory archive keyed by field name.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Archivable, ArchiveError, Archiver, Unarchiver};

/// A single archived field value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArchivedValue {
    /// One scalar.
    Scalar(f64),
    /// Ordered scalars.
    Vector(Vec<f64>),
    /// Free-form text.
    Text(String),
}

impl ArchivedValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ArchivedValue::Scalar(_) => "scalar",
            ArchivedValue::Vector(_) => "vector",
            ArchivedValue::Text(_) => "text",
        }
    }
}

/// In-memory archive mapping field names to values.
///
/// Writing the same field twice is rejected, so an archive always reflects
/// exactly one writer's view of each field.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyArchive {
    fields: BTreeMap<String, ArchivedValue>,
}

impl PropertyArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Archive `object` into a fresh archive.
    pub fn from_archivable<A: Archivable + ?Sized>(object: &A) -> Result<Self, ArchiveError> {
        let mut archive = Self::new();
        object.write_to_archive(&mut archive)?;
        Ok(archive)
    }

    /// Restore `object` from this archive.
    pub fn restore_into<A: Archivable + ?Sized>(&self, object: &mut A) -> Result<(), ArchiveError> {
        object.read_from_archive(self)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stored field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ArchivedValue> {
        self.fields.get(name)
    }

    fn insert(&mut self, name: &str, value: ArchivedValue) -> Result<(), ArchiveError> {
        if self.fields.contains_key(name) {
            return Err(ArchiveError::DuplicateField {
                name: name.to_string(),
            });
        }
        trace!(field = name, kind = value.kind(), "archive write");
        self.fields.insert(name.to_string(), value);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&ArchivedValue, ArchiveError> {
        trace!(field = name, "archive read");
        self.fields.get(name).ok_or_else(|| ArchiveError::MissingField {
            name: name.to_string(),
        })
    }
}

fn mismatch(name: &str, expected: &'static str, found: &ArchivedValue) -> ArchiveError {
    ArchiveError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

impl Archiver for PropertyArchive {
    fn write_scalar(&mut self, name: &str, value: f64) -> Result<(), ArchiveError> {
        self.insert(name, ArchivedValue::Scalar(value))
    }

    fn write_vector(&mut self, name: &str, values: &[f64]) -> Result<(), ArchiveError> {
        self.insert(name, ArchivedValue::Vector(values.to_vec()))
    }

    fn write_text(&mut self, name: &str, value: &str) -> Result<(), ArchiveError> {
        self.insert(name, ArchivedValue::Text(value.to_string()))
    }
}

impl Unarchiver for PropertyArchive {
    fn read_scalar(&self, name: &str) -> Result<f64, ArchiveError> {
        match self.lookup(name)? {
            ArchivedValue::Scalar(value) => Ok(*value),
            other => Err(mismatch(name, "scalar", other)),
        }
    }

    fn read_vector(&self, name: &str) -> Result<Vec<f64>, ArchiveError> {
        match self.lookup(name)? {
            ArchivedValue::Vector(values) => Ok(values.clone()),
            other => Err(mismatch(name, "vector", other)),
        }
    }

    fn read_text(&self, name: &str) -> Result<String, ArchiveError> {
        match self.lookup(name)? {
            ArchivedValue::Text(value) => Ok(value.clone()),
            other => Err(mismatch(name, "text", other)),
        }
    }
}
