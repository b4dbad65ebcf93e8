//! Named-field persistence contract
//!
//! Persistable types implement [`Archivable`] against the abstract
//! [`Archiver`] sink and [`Unarchiver`] source. Each type owns its field
//! names; wrappers forward to the type they wrap without adding fields.
//! [`PropertyArchive`] is an in-memory implementation of both sides.

mod property;

pub use property::{ArchivedValue, PropertyArchive};

use thiserror::Error;

/// Errors raised while writing or reading archived state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArchiveError {
    /// Requested field was never written.
    #[error("missing archive field `{name}`")]
    MissingField {
        /// Field name.
        name: String,
    },

    /// Field written twice into the same archive.
    #[error("archive field `{name}` written more than once")]
    DuplicateField {
        /// Field name.
        name: String,
    },

    /// Field holds a different kind of value than requested.
    #[error("archive field `{name}` holds a {found}, expected a {expected}")]
    TypeMismatch {
        /// Field name.
        name: String,
        /// Kind requested by the reader.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },

    /// Field decoded but its value is unusable.
    #[error("invalid value for archive field `{name}`: {reason}")]
    InvalidValue {
        /// Field name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ArchiveError {
    /// Helper for constructing validation failures from `read_from_archive`.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ArchiveError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Write side of the archiving collaborator.
pub trait Archiver {
    /// Store a scalar under `name`.
    fn write_scalar(&mut self, name: &str, value: f64) -> Result<(), ArchiveError>;

    /// Store a vector of scalars under `name`.
    fn write_vector(&mut self, name: &str, values: &[f64]) -> Result<(), ArchiveError>;

    /// Store a string under `name`.
    fn write_text(&mut self, name: &str, value: &str) -> Result<(), ArchiveError>;
}

/// Read side of the archiving collaborator.
///
/// Reads are lookups by name and leave the source unchanged, so one archive
/// can restore any number of objects.
pub trait Unarchiver {
    /// Read the scalar stored under `name`.
    fn read_scalar(&self, name: &str) -> Result<f64, ArchiveError>;

    /// Read the vector stored under `name`.
    fn read_vector(&self, name: &str) -> Result<Vec<f64>, ArchiveError>;

    /// Read the string stored under `name`.
    fn read_text(&self, name: &str) -> Result<String, ArchiveError>;
}

/// A type whose state can be written to and restored from an archive.
pub trait Archivable {
    /// Emit this object's fields.
    fn write_to_archive(&self, archiver: &mut dyn Archiver) -> Result<(), ArchiveError>;

    /// Replace this object's state with the fields read from `unarchiver`.
    fn read_from_archive(&mut self, unarchiver: &dyn Unarchiver) -> Result<(), ArchiveError>;
}
