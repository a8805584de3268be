use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::{FastHashMap, PropertyKey, Property};
use crate::value::Value;

pub const HEALTH: &str = "health";
pub const POINTS: &str = "points";
pub const SKILLS: &str = "skills";

/// A record handle shared between guarded views and raw callers.
pub type SharedRecord = Rc<RefCell<Record>>;

// ─── Record ─────────────────────────────────────────────────────────────────
/// An ordered property table. Keys keep insertion order; string names and
/// symbols share the table but are enumerated separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub(crate) order: Vec<PropertyKey>,
    pub(crate) props: FastHashMap<PropertyKey, Property>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default player: `health = 100`, `points = 0`, `skills = []`.
    pub fn player() -> Self {
        let mut record = Self::new();
        record.insert_new(HEALTH.into(), Property::data(Value::from(100)));
        record.insert_new(POINTS.into(), Property::data(Value::from(0)));
        record.insert_new(SKILLS.into(), Property::data(Value::Array(Vec::new())));
        record
    }

    #[inline]
    pub fn into_shared(self) -> SharedRecord {
        Rc::new(RefCell::new(self))
    }

    /// Append a key that is known to be absent.
    pub(crate) fn insert_new(&mut self, key: PropertyKey, prop: Property) {
        debug_assert!(!self.props.contains_key(&key), "insert_new: {key} already present");
        self.order.push(key.clone());
        self.props.insert(key, prop);
    }
}

/// Renders enumerable properties, names first, then symbol keys bracketed.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enumerable = || self.entries().filter(|(_, p)| p.attrs.enumerable);
        let names = enumerable().filter(|(k, _)| !k.is_symbol());
        let symbols = enumerable().filter(|(k, _)| k.is_symbol());
        let mut visible = names.chain(symbols).peekable();
        if visible.peek().is_none() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, (key, prop)) in visible.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match key {
                PropertyKey::Name(n) => write!(f, "{}: {}", n, prop.value.inspect())?,
                PropertyKey::Symbol(s) => write!(f, "[{}]: {}", s, prop.value.inspect())?,
            }
        }
        f.write_str(" }")
    }
}

/// Serializes like `JSON.stringify`: enumerable string keys only.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(None)?;
        for (key, prop) in self.entries() {
            if let (Some(name), true) = (key.as_name(), prop.attrs.enumerable) {
                m.serialize_entry(name, &prop.value)?;
            }
        }
        m.end()
    }
}
