//! String interning.
//!
//! The teacher's interner is a concurrent, globally-shared `DashMap` table
//! sized for a multi-threaded, incremental compiler. This compiler runs one
//! source file through one pipeline on one thread per invocation (§5), so
//! the concurrency and global-lifetime machinery buys nothing — it's kept
//! as a plain per-`Interner` table instead. The interning pattern itself
//! (hash-cons identifiers to small indices) is preserved.

use rustc_hash::FxHashMap;

/// An interned string handle. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owns the backing storage for every symbol interned through it.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Interner { map: FxHashMap::default(), strings: Vec::new() }
    }

    /// Interns `text`, returning the existing symbol if this string was seen
    /// before.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.map.get(text) {
            return *sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(text.into());
        self.map.insert(text.into(), sym);
        sym
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.index()]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_text_dedupes() {
        let mut interner = Interner::new();
        let a = interner.intern("hello");
        let b = interner.intern("hello");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn interning_distinct_text_produces_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), "foo");
        assert_eq!(interner.resolve(b), "bar");
    }
}
