//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Interior state of the interner.
struct Inner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name::raw`.
    strings: Vec<&'static str>,
}

/// String interner with stable `&str` lookup.
///
/// Interned strings are leaked into `'static` storage so that `lookup`
/// can hand out references without holding the lock. The number of
/// distinct identifiers in a workflow program is small and bounded, so
/// the leak is the whole story of the interner's memory use.
///
/// # Thread Safety
/// Uses an `RwLock`, so the interner can be shared across concurrent
/// switch evaluations behind a plain reference or `Arc`.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", 0);
        StringInterner {
            inner: RwLock::new(Inner {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Returns the existing `Name` if the string was interned before.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut guard = self.inner.write();
        // Re-check: another writer may have interned it between locks.
        if let Some(&idx) = guard.map.get(s) {
            return Name::from_raw(idx);
        }
        let Ok(idx) = u32::try_from(guard.strings.len()) else {
            panic!("interner capacity exceeded: {} strings", guard.strings.len());
        };
        let stored: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.map.insert(stored, idx);
        guard.strings.push(stored);
        Name::from_raw(idx)
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if the name was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        let idx = name.raw() as usize;
        match guard.strings.get(idx) {
            Some(&s) => s,
            None => panic!("name {idx} not interned here"),
        }
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        StringInterner::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_round_trip() {
        let interner = StringInterner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("beta");
        assert_ne!(a, b);
        assert_eq!(interner.lookup(a), "alpha");
        assert_eq!(interner.lookup(b), "beta");
    }

    #[test]
    fn intern_is_idempotent() {
        let interner = StringInterner::new();
        let a1 = interner.intern("x");
        let a2 = interner.intern("x");
        assert_eq!(a1, a2);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn empty_string_is_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(interner.is_empty());
    }
}
