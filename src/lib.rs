//! An in-memory compressed prefix tree (radix trie) keyed by byte strings.
//!
//! ```
//! use sprig::Trie;
//!
//! let mut t = Trie::new();
//! assert_eq!(t.insert("car", 1), None);
//! assert_eq!(t.insert("card", 2), None);
//! assert_eq!(t.insert("car", 3), Some(1));
//!
//! assert_eq!(t.get("card"), Some(&2));
//! assert_eq!(t.get("ca"), None);
//!
//! assert_eq!(t.remove("car"), Some(3));
//! t.compact();
//! assert_eq!(t.node_count(), 1);
//! ```

// TODO:
// [ ] Dense 256-entry child table for nodes with high fan-out
// [ ] Entry API

mod check;
mod compact;
mod insert;
mod node;
mod remove;
mod trie;


pub use check::InvariantError;
pub use trie::Trie;
