use std::io;

use hashbrown::HashMap;

pub type Children<T> = HashMap<u8, Box<Node<T>>>;

pub struct Node<T> {
    pub prefix: Vec<u8>,
    pub value: Option<T>,
    pub children: Children<T>,
}

/// Length of the longest common prefix of `a` and `b`.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl<T> Node<T> {
    pub fn new(prefix: Vec<u8>, children: Children<T>, value: Option<T>) -> Self {
        Self {
            prefix,
            value,
            children,
        }
    }

    pub fn leaf(prefix: &[u8], value: T) -> Self {
        Self::new(prefix.to_owned(), Children::new(), Some(value))
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// A valueless node without children. These only exist transiently and are
    /// pruned by the frame that owns them.
    pub fn is_dangling(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    pub fn lookup(&self, byte: u8) -> Option<&Node<T>> {
        self.children.get(&byte).map(|c| &**c)
    }

    pub fn lookup_mut(&mut self, byte: u8) -> Option<&mut Node<T>> {
        self.children.get_mut(&byte).map(|c| &mut **c)
    }

    pub fn add_child(&mut self, child: Node<T>) {
        let branch = child.prefix[0];
        let prev = self.children.insert(branch, Box::new(child));
        debug_assert!(prev.is_none(), "child {} already present", branch);
    }

    pub fn get(&self, key: &[u8]) -> Option<&T> {
        let mut cur = self;
        let mut key = key;
        loop {
            key = key.strip_prefix(&cur.prefix[..])?;
            match key.first() {
                None => return cur.value.as_ref(),
                Some(&branch) => cur = cur.lookup(branch)?,
            }
        }
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut T> {
        let mut cur = self;
        let mut key = key;
        loop {
            key = key.strip_prefix(&cur.prefix[..])?;
            match key.first() {
                None => return cur.value.as_mut(),
                Some(&branch) => cur = cur.lookup_mut(branch)?,
            }
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(|c| c.node_count()).sum::<usize>()
    }

    fn sorted_children(&self) -> Vec<(u8, &Node<T>)> {
        let mut children = self
            .children
            .iter()
            .map(|(&b, c)| (b, &**c))
            .collect::<Vec<_>>();
        children.sort_unstable_by_key(|&(b, _)| b);
        children
    }

    pub fn debug(&self, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(
            out,
            "Node {{ prefix: {:?}, has_value: {:?}, children: {} }}",
            self.prefix,
            self.has_value(),
            self.children.len()
        )?;

        let children = self.sorted_children();
        if let Some((last, init)) = children.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for (i, c) in init {
                write!(out, "{} \u{251C} {}: ", indent, i)?;
                c.debug(&child_indent, out)?;
            }

            let (i, c) = last;
            write!(out, "{} \u{2514} {}: ", indent, i)?;
            let child_indent = format!("{}  ", indent);
            c.debug(&child_indent, out)?;
        }
        Ok(())
    }
}
