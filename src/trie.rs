use std::fmt;
use std::io;

use crate::check::{Checker, InvariantError};
use crate::node::Node;

/// A map from byte strings to `T`, stored as a compressed prefix tree.
///
/// Keys are anything that can be viewed as `&[u8]` and are compared byte by
/// byte. Removals prune emptied branches right away, but chains of valueless
/// single-child nodes are only collapsed by an explicit [`Trie::compact`].
pub struct Trie<T> {
    pub(crate) root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, branches included.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.node_count())
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&T> {
        self.root.as_ref()?.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut T> {
        self.root.as_mut()?.get_mut(key.as_ref())
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the value it replaced, if any.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: T) -> Option<T> {
        let key = key.as_ref();
        let old = match self.root {
            None => {
                self.root = Some(Box::new(Node::leaf(key, value)));
                None
            }
            Some(ref mut root) => root.insert(key, value),
        };
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<T> {
        let root = self.root.as_mut()?;
        let removed = root.remove(key.as_ref())?;
        if root.is_dangling() {
            self.root = None;
        }
        self.len -= 1;
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Merges every valueless node that has a single child into that child.
    /// Lookups are unaffected; the tree just gets shallower.
    pub fn compact(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.compact();
        }
    }

    pub fn is_compact(&self) -> bool {
        self.root.as_ref().map_or(true, |r| r.is_compact())
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.check(false)
    }

    /// Like [`Trie::check_invariants`], and also rejects chains that
    /// [`Trie::compact`] would merge.
    pub fn check_compacted(&self) -> Result<(), InvariantError> {
        self.check(true)
    }

    fn check(&self, compacted: bool) -> Result<(), InvariantError> {
        let mut checker = Checker::new(compacted);
        if let Some(root) = self.root.as_ref() {
            checker.check_root(root)?;
        }
        if checker.values != self.len {
            return Err(InvariantError::LenMismatch {
                tracked: self.len,
                counted: checker.values,
            });
        }
        Ok(())
    }

    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        match self.root {
            None => writeln!(out, "(empty)"),
            Some(ref root) => root.debug("", out),
        }
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl<K: AsRef<[u8]>, T> Extend<(K, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: AsRef<[u8]>, T> FromIterator<(K, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut t = Trie::new();
        t.extend(iter);
        t
    }
}
