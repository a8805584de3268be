use smol_str::SmolStr;

use super::record::Record;
use crate::types::{Property, PropertyKey, Symbol};
use crate::value::Value;

impl Record {
    // ════════════════════════════════════════════════════════════════════════
    // Lookup
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<&Value> {
        let key: PropertyKey = key.into();
        self.props.get(&key).map(|p| &p.value)
    }

    /// Value and attributes of a property.
    #[inline]
    pub fn get_property(&self, key: impl Into<PropertyKey>) -> Option<&Property> {
        let key: PropertyKey = key.into();
        self.props.get(&key)
    }

    #[inline]
    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        let key: PropertyKey = key.into();
        self.props.contains_key(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ════════════════════════════════════════════════════════════════════════
    // Enumeration
    // ════════════════════════════════════════════════════════════════════════

    /// All properties in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> + '_ {
        self.order.iter().filter_map(|k| self.props.get(k).map(|p| (k, p)))
    }

    /// Every string-named key, non-enumerable ones included.
    pub fn names(&self) -> Vec<SmolStr> {
        self.order
            .iter()
            .filter_map(|k| k.as_name().map(SmolStr::new))
            .collect()
    }

    /// Every symbol key.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.order.iter().filter_map(|k| k.as_symbol().cloned()).collect()
    }

    /// Every own key: names first, then symbols, each in insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let (names, symbols): (Vec<_>, Vec<_>) =
            self.order.iter().cloned().partition(|k| !k.is_symbol());
        names.into_iter().chain(symbols).collect()
    }

    /// The string keys a `for … in` loop visits.
    pub fn enumerable_names(&self) -> Vec<SmolStr> {
        self.entries()
            .filter(|(_, p)| p.attrs.enumerable)
            .filter_map(|(k, _)| k.as_name().map(SmolStr::new))
            .collect()
    }
}
