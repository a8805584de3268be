use smol_str::SmolStr;
use std::fmt;
use tracing::{info, warn};

use super::policy::check_write;
use crate::error::GuardError;
use crate::record::SharedRecord;
use crate::types::{PropertyKey, Symbol};
use crate::value::Value;

/// Logging, validating access to a shared record.
#[derive(Debug, Clone)]
pub struct GuardedView {
    target: SharedRecord,
}

impl GuardedView {
    pub fn new(target: &SharedRecord) -> Self {
        Self {
            target: SharedRecord::clone(target),
        }
    }

    /// Read a property. A missing property yields a descriptive string
    /// rather than an error.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        let key: PropertyKey = key.into();
        info!(target: "guard", "[PROXY] Reading property {key}");
        match self.target.borrow().get(&key) {
            Some(v) => v.clone(),
            None => Value::from(format!("The property {key} does not exist.")),
        }
    }

    /// Validate, then write. On rejection the record is left untouched.
    pub fn set(
        &self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Result<(), GuardError> {
        let key: PropertyKey = key.into();
        let value: Value = value.into();
        if let Err(err) = check_write(&key, &value) {
            warn!(target: "guard", "[PROXY] {err}");
            return Err(err);
        }
        info!(target: "guard", "[PROXY] Assigning {value} to property {key}");
        self.target.borrow_mut().set(key, value)?;
        Ok(())
    }

    /// Read `key` and append `item` to the array stored there, in place.
    pub fn push(
        &self,
        key: impl Into<PropertyKey>,
        item: impl Into<Value>,
    ) -> Result<(), GuardError> {
        let key: PropertyKey = key.into();
        info!(target: "guard", "[PROXY] Reading property {key}");
        let mut record = self.target.borrow_mut();
        match record.get_mut(&key).and_then(Value::as_array_mut) {
            Some(items) => {
                items.push(item.into());
                Ok(())
            }
            None => Err(GuardError::NotAnArray(key)),
        }
    }

    /// String-named own keys, hidden ones included, symbols excluded.
    pub fn own_keys(&self) -> Vec<SmolStr> {
        info!(target: "guard", "[PROXY] Listing all properties of the object");
        self.target.borrow().names()
    }

    /// Symbol-keyed own properties.
    pub fn own_symbols(&self) -> Vec<Symbol> {
        info!(target: "guard", "[PROXY] Listing all properties of the object");
        self.target.borrow().symbols()
    }
}

/// Shows the wrapped record, as inspecting a proxy shows its target.
impl fmt::Display for GuardedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target.borrow())
    }
}
