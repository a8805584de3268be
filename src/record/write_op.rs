use super::record::Record;
use crate::error::RecordError;
use crate::types::{Attributes, Property, PropertyKey};
use crate::value::Value;

impl Record {
    /// Plain assignment. Creates a default data property when the key is
    /// absent; fails on a read-only property.
    pub fn set(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Result<(), RecordError> {
        let key: PropertyKey = key.into();
        match self.props.get_mut(&key) {
            Some(p) if !p.attrs.writable => Err(RecordError::ReadOnly(key)),
            Some(p) => {
                p.value = value.into();
                Ok(())
            }
            None => {
                self.insert_new(key, Property::data(value.into()));
                Ok(())
            }
        }
    }

    /// In-place access to a stored value. Does not consult `writable`: the
    /// property keeps pointing at the same value, only its contents change.
    #[inline]
    pub fn get_mut(&mut self, key: impl Into<PropertyKey>) -> Option<&mut Value> {
        let key: PropertyKey = key.into();
        self.props.get_mut(&key).map(|p| &mut p.value)
    }

    /// Remove a property, returning its value. Absent keys are not an error.
    pub fn delete(&mut self, key: impl Into<PropertyKey>) -> Result<Option<Value>, RecordError> {
        let key: PropertyKey = key.into();
        match self.props.get(&key) {
            None => return Ok(None),
            Some(p) if !p.attrs.configurable => return Err(RecordError::CannotDelete(key)),
            Some(_) => {}
        }
        self.order.retain(|k| k != &key);
        Ok(self.props.remove(&key).map(|p| p.value))
    }

    /// Define a property with explicit attributes. An existing property keeps
    /// its position. A non-configurable property only accepts definitions
    /// that leave it as locked down as it already is.
    pub fn define(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
        attrs: Attributes,
    ) -> Result<(), RecordError> {
        let key: PropertyKey = key.into();
        let value: Value = value.into();
        match self.props.get_mut(&key) {
            Some(existing) => {
                let cur = existing.attrs;
                if !cur.configurable {
                    let forbidden = attrs.configurable
                        || attrs.enumerable != cur.enumerable
                        || (!cur.writable && (attrs.writable || existing.value != value));
                    if forbidden {
                        return Err(RecordError::CannotRedefine(key));
                    }
                }
                *existing = Property::new(value, attrs);
            }
            None => self.insert_new(key, Property::new(value, attrs)),
        }
        Ok(())
    }
}
