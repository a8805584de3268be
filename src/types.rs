use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::value::Value;

pub type FastHashMap<K, V> = FxHashMap<K, V>;

// ─── Symbol ─────────────────────────────────────────────────────────────────

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A collision-free property key. Two symbols never compare equal, even with
/// the same description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: SmolStr,
}

impl Symbol {
    pub fn new(description: &str) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: SmolStr::new(description),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

// ─── PropertyKey ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(SmolStr),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Name(n) => Some(n.as_str()),
            PropertyKey::Symbol(_) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            PropertyKey::Symbol(s) => Some(s),
            PropertyKey::Name(_) => None,
        }
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(n) => f.write_str(n),
            PropertyKey::Symbol(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::Name(SmolStr::new(s))
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::Name(SmolStr::from(s))
    }
}

impl From<SmolStr> for PropertyKey {
    fn from(s: SmolStr) -> Self {
        PropertyKey::Name(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(s: &Symbol) -> Self {
        PropertyKey::Symbol(s.clone())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(k: &PropertyKey) -> Self {
        k.clone()
    }
}

// ─── Property ───────────────────────────────────────────────────────────────

/// Per-property flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Attributes {
    /// What a plain assignment creates.
    pub const DEFAULT: Attributes = Attributes {
        writable: true,
        enumerable: true,
        configurable: true,
    };

    pub const fn new(writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self {
            writable,
            enumerable,
            configurable,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes::DEFAULT
    }
}

/// A stored slot: the value plus its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value: Value,
    pub attrs: Attributes,
}

impl Property {
    pub fn new(value: Value, attrs: Attributes) -> Self {
        Self { value, attrs }
    }

    /// A plain data property (writable, enumerable, configurable).
    pub fn data(value: Value) -> Self {
        Self::new(value, Attributes::DEFAULT)
    }
}
