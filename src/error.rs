// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

use crate::types::PropertyKey;
use crate::value::Value;

/// Attribute violations raised by the record itself.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Cannot assign to read only property '{0}'")]
    ReadOnly(PropertyKey),
    #[error("Cannot delete property '{0}'")]
    CannotDelete(PropertyKey),
    #[error("Cannot redefine property: {0}")]
    CannotRedefine(PropertyKey),
}

/// Rejections raised by a guarded view.
#[derive(Debug, Error, PartialEq)]
pub enum GuardError {
    #[error("Invalid value for health ({0}). Must be a number between 0 and 100.")]
    InvalidHealth(Value),
    #[error("Invalid value for points ({0}). Must be a number.")]
    InvalidPoints(Value),
    #[error("The property {0} is not an array")]
    NotAnArray(PropertyKey),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Anything a demo walkthrough can fail with.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Guard(#[from] GuardError),
}
