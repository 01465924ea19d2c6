// Removal keeps one invariant inductively: every allocated node has either a
// value or at least one child.
//
// Say we're deleting a key `k` that's present in our trie.  We descend through
// the trie, consuming bytes of `k` until we reach the node holding the value,
// and take the value out.  If that node has no children it is now dangling, so
// the frame that owns it unlinks it from its child map.  That in turn may leave
// the parent both valueless and childless, so every frame on the way back up
// repeats the check for the child it just recursed into.
//
// Removal never merges a valueless node into its only child.  Chains like that
// are left in place for `compact` to collapse.

use crate::node::Node;

impl<T> Node<T> {
    pub fn remove(&mut self, key: &[u8]) -> Option<T> {
        let key = key.strip_prefix(&self.prefix[..])?;
        let branch = match key.first() {
            // Leave `self` dangling if it has no children and let our parent
            // unlink us.
            None => return self.value.take(),
            Some(&b) => b,
        };

        let child = self.lookup_mut(branch)?;
        let removed = child.remove(key)?;
        if child.is_dangling() {
            self.children.remove(&branch);
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Children, Node};

    fn build(keys: &[&str]) -> Node<usize> {
        let mut n = Node::new(keys[0].as_bytes().to_owned(), Children::new(), Some(0));
        for (i, k) in keys.iter().enumerate().skip(1) {
            n.insert(k.as_bytes(), i);
        }
        n
    }

    #[test]
    fn test_remove_leaf_prunes_it() {
        let mut n = build(&["car", "card"]);
        assert_eq!(n.node_count(), 2);

        assert_eq!(n.remove(b"card"), Some(1));
        assert_eq!(n.node_count(), 1);
        assert!(n.children.is_empty());
        assert_eq!(n.get(b"car"), Some(&0));
    }

    #[test]
    fn test_remove_prunes_upwards() {
        // "ab" is a branch with children "c" and "d", and "abdx" hangs off "d".
        let mut n = build(&["abc", "abd", "abdx"]);
        n.remove(b"abd");
        assert_eq!(n.node_count(), 4);

        assert_eq!(n.remove(b"abdx"), Some(2));
        assert_eq!(n.node_count(), 2);
        assert!(n.lookup(b'd').is_none());
        assert_eq!(n.get(b"abc"), Some(&0));
    }

    #[test]
    fn test_remove_branch_value_keeps_children() {
        let mut n = build(&["car", "card", "cars"]);
        assert_eq!(n.remove(b"car"), Some(0));

        assert!(n.value.is_none());
        assert_eq!(n.children.len(), 2);
        assert_eq!(n.get(b"card"), Some(&1));
        assert_eq!(n.get(b"cars"), Some(&2));
    }

    #[test]
    fn test_remove_missing() {
        let mut n = build(&["car", "card"]);
        assert_eq!(n.remove(b"ca"), None);
        assert_eq!(n.remove(b"cards"), None);
        assert_eq!(n.remove(b"cat"), None);
        assert_eq!(n.remove(b""), None);
        assert_eq!(n.node_count(), 2);

        // A branch node without a value is not a key.
        let mut n = build(&["cart", "cat"]);
        assert_eq!(n.remove(b"ca"), None);
        assert_eq!(n.node_count(), 3);
    }

    #[test]
    fn test_remove_root_value_leaves_dangling_root() {
        let mut n = build(&["solo"]);
        assert_eq!(n.remove(b"solo"), Some(0));
        assert!(n.is_dangling());
    }
}
