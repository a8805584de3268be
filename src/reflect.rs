//! Unguarded reflective accessors.
//!
//! Thin wrappers over a [`SharedRecord`] that skip every check a
//! [`GuardedView`](crate::guard::GuardedView) performs. Only the record's own
//! attribute flags (`writable`, `configurable`) can make them fail.

use tracing::debug;

use crate::error::RecordError;
use crate::record::SharedRecord;
use crate::types::{Attributes, PropertyKey};
use crate::value::Value;

/// Current value, or `None` when absent.
pub fn get(record: &SharedRecord, key: impl Into<PropertyKey>) -> Option<Value> {
    let key: PropertyKey = key.into();
    debug!(target: "reflect", "get {key}");
    record.borrow().get(&key).cloned()
}

/// Write without validation. Returns the same handle for chaining.
pub fn set<'a>(
    record: &'a SharedRecord,
    key: impl Into<PropertyKey>,
    value: impl Into<Value>,
) -> Result<&'a SharedRecord, RecordError> {
    let key: PropertyKey = key.into();
    let value: Value = value.into();
    debug!(target: "reflect", "set {key} = {value}");
    record.borrow_mut().set(key, value)?;
    Ok(record)
}

pub fn has(record: &SharedRecord, key: impl Into<PropertyKey>) -> bool {
    let key: PropertyKey = key.into();
    debug!(target: "reflect", "has {key}");
    record.borrow().has(&key)
}

/// Remove a property. Deleting an absent property succeeds.
pub fn delete<'a>(
    record: &'a SharedRecord,
    key: impl Into<PropertyKey>,
) -> Result<&'a SharedRecord, RecordError> {
    let key: PropertyKey = key.into();
    debug!(target: "reflect", "delete {key}");
    record.borrow_mut().delete(key)?;
    Ok(record)
}

/// Attach or redefine a property with explicit attributes.
pub fn define<'a>(
    record: &'a SharedRecord,
    key: impl Into<PropertyKey>,
    value: impl Into<Value>,
    writable: bool,
    enumerable: bool,
    configurable: bool,
) -> Result<&'a SharedRecord, RecordError> {
    let key: PropertyKey = key.into();
    let attrs = Attributes::new(writable, enumerable, configurable);
    debug!(target: "reflect", "define {key} {attrs:?}");
    record.borrow_mut().define(key, value, attrs)?;
    Ok(record)
}

/// Every own key, non-enumerable names and symbols included.
pub fn own_keys(record: &SharedRecord) -> Vec<PropertyKey> {
    debug!(target: "reflect", "own_keys");
    record.borrow().own_keys()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::GuardedView;
    use crate::record::{HEALTH, POINTS, Record, SKILLS};
    use crate::types::Symbol;

    #[test]
    fn test_raw_set_bypasses_validation() {
        let record = Record::player().into_shared();
        let view = GuardedView::new(&record);
        set(&record, HEALTH, 500).unwrap();
        set(&record, POINTS, "cien").unwrap();
        assert_eq!(view.get(HEALTH), Value::from(500));
        assert_eq!(view.get(POINTS), Value::from("cien"));
    }

    #[test]
    fn test_reflect_walkthrough() {
        let record = Record::player().into_shared();

        assert_eq!(get(&record, HEALTH), Some(Value::from(100)));
        assert_eq!(get(&record, "nivel"), None);

        set(&record, "level", 1).unwrap();
        assert_eq!(
            record.borrow().to_string(),
            "{ health: 100, points: 0, skills: [], level: 1 }"
        );

        assert!(has(&record, POINTS));
        assert!(!has(&record, "name"));

        delete(&record, HEALTH).unwrap();
        assert!(!has(&record, HEALTH));
        assert_eq!(
            record.borrow().to_string(),
            "{ points: 0, skills: [], level: 1 }"
        );

        define(&record, "name", "Warrior", true, true, true).unwrap();
        assert_eq!(
            own_keys(&record),
            vec![
                PropertyKey::from(POINTS),
                PropertyKey::from(SKILLS),
                PropertyKey::from("level"),
                PropertyKey::from("name"),
            ]
        );
    }

    #[test]
    fn test_own_keys_include_hidden_and_symbols() {
        let record = Record::new().into_shared();
        let id = Symbol::new("id");
        set(&record, &id, 12345).unwrap();
        define(&record, "hidden", true, true, false, true).unwrap();
        assert_eq!(
            own_keys(&record),
            vec![PropertyKey::from("hidden"), PropertyKey::from(id)]
        );
    }

    #[test]
    fn test_attribute_flags_still_apply() {
        let record = Record::new().into_shared();
        define(&record, "name", "Warrior", false, true, false).unwrap();
        assert_eq!(
            set(&record, "name", "Mage").unwrap_err(),
            RecordError::ReadOnly(PropertyKey::from("name"))
        );
        assert_eq!(
            delete(&record, "name").unwrap_err(),
            RecordError::CannotDelete(PropertyKey::from("name"))
        );
        assert_eq!(get(&record, "name"), Some(Value::from("Warrior")));
    }

    #[test]
    fn test_chained_calls_return_same_handle() {
        let record = Record::new().into_shared();
        let same = set(&record, "a", 1)
            .and_then(|r| set(r, "b", 2))
            .and_then(|r| delete(r, "a"))
            .unwrap();
        assert!(std::rc::Rc::ptr_eq(same, &record));
        assert_eq!(own_keys(&record), vec![PropertyKey::from("b")]);
    }
}
