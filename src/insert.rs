use hashbrown::hash_map::Entry;
use std::mem;

use crate::node::{common_prefix_len, Children, Node};

impl<T> Node<T> {
    // The original tree...
    // ```
    //         o      prefix: abc
    //         |             ^ split_at
    //         *      value: old_value
    //       / | \    children: old_children
    // ```
    // becomes...
    // ```
    //         o      prefix: a
    //         |
    //         *      value: None
    //         | b    children: b -> old node
    //         o      prefix: bc
    //         |
    //         *      value: old_value
    //       / | \    children: old_children
    // ```
    // The caller then either stores its value on the truncated node or hangs a
    // second leaf off it.
    fn split_prefix(&mut self, split_at: usize) {
        debug_assert!(split_at < self.prefix.len());
        let child_prefix = self.prefix.split_off(split_at);
        let old_children = mem::replace(&mut self.children, Children::new());
        let old_value = self.value.take();

        self.add_child(Node::new(child_prefix, old_children, old_value));
    }

    pub fn insert(&mut self, key: &[u8], value: T) -> Option<T> {
        let mut cur = self;
        let mut key = key;
        loop {
            let common = common_prefix_len(&cur.prefix, key);
            if common < cur.prefix.len() {
                // Whatever is left of `key` now diverges from every child, so
                // this always ends the descent.
                cur.split_prefix(common);
            }
            key = &key[common..];

            let branch = match key.first() {
                None => return cur.value.replace(value),
                Some(&b) => b,
            };
            match cur.children.entry(branch) {
                Entry::Occupied(e) => cur = &mut **e.into_mut(),
                Entry::Vacant(e) => {
                    e.insert(Box::new(Node::leaf(key, value)));
                    return None;
                }
            }
        }
    }
}
