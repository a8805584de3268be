//! Validating interception over a shared [`Record`](crate::record::Record).
//!
//! A [`GuardedView`] logs every read, write and key enumeration and checks
//! writes against [`check_write`] before they reach the record. It holds a
//! handle, never the record itself, so every view and every raw caller of
//! the same [`SharedRecord`](crate::record::SharedRecord) sees the same data.

pub mod policy;
pub mod view;

pub use policy::{HEALTH_RANGE, check_write};
pub use view::GuardedView;
