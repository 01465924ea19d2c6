use crate::node::Node;

impl<T> Node<T> {
    // A valueless node with a single child is folded into that child:
    // ```
    //         o      prefix: ab              o      prefix: abcd
    //         |      value: None    =>       |
    //         | c                            *      value: v
    //         o      prefix: cd            / | \    children: grandchildren
    //         |
    //         *      value: v
    //       / | \
    // ```
    // The merged prefix keeps the node's first byte, so our parent's child map
    // stays keyed correctly.
    fn merge_only_child(&mut self) {
        let (_, child) = match self.children.drain().next() {
            Some(pair) => pair,
            None => return,
        };
        let Node {
            prefix,
            value,
            children,
        } = *child;
        self.prefix.extend_from_slice(&prefix);
        self.value = value;
        self.children = children;
    }

    /// Returns the number of merges performed in this subtree.
    pub fn compact(&mut self) -> usize {
        let mut merged = 0;
        while self.value.is_none() && self.children.len() == 1 {
            self.merge_only_child();
            merged += 1;
        }
        for child in self.children.values_mut() {
            merged += child.compact();
        }
        merged
    }

    /// True if no node in this subtree qualifies for a merge.
    pub fn is_compact(&self) -> bool {
        if self.value.is_none() && self.children.len() == 1 {
            return false;
        }
        self.children.values().all(|c| c.is_compact())
    }
}
