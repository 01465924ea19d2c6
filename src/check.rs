use std::fmt;

use crate::node::Node;

/// A structural defect found by [`Trie::check_invariants`] or
/// [`Trie::check_compacted`]. Each variant carries the full key of the
/// offending node.
///
/// [`Trie::check_invariants`]: crate::Trie::check_invariants
/// [`Trie::check_compacted`]: crate::Trie::check_compacted
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantError {
    /// A node that is neither a key nor a branch.
    DanglingNode { path: Vec<u8> },
    /// A non-root node with an empty prefix.
    EmptyPrefix { path: Vec<u8> },
    /// A child stored under a byte other than the first byte of its prefix.
    MisfiledChild { path: Vec<u8>, branch: u8 },
    /// A valueless node with exactly one child.
    UncompactedChain { path: Vec<u8> },
    /// The number of stored values disagrees with the tracked length.
    LenMismatch { tracked: usize, counted: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DanglingNode { path } => {
                write!(f, "node at {:?} has no value and no children", path)
            }
            InvariantError::EmptyPrefix { path } => {
                write!(f, "non-root node at {:?} has an empty prefix", path)
            }
            InvariantError::MisfiledChild { path, branch } => {
                write!(f, "node at {:?} is stored under branch byte {}", path, branch)
            }
            InvariantError::UncompactedChain { path } => {
                write!(f, "node at {:?} has no value and a single child", path)
            }
            InvariantError::LenMismatch { tracked, counted } => {
                write!(f, "trie tracks {} keys but holds {} values", tracked, counted)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

pub(crate) struct Checker {
    pub compacted: bool,
    pub values: usize,
    path: Vec<u8>,
}

impl Checker {
    pub fn new(compacted: bool) -> Self {
        Self {
            compacted,
            values: 0,
            path: vec![],
        }
    }

    pub fn check_root<T>(&mut self, root: &Node<T>) -> Result<(), InvariantError> {
        self.check_node(root, None)
    }

    fn check_node<T>(&mut self, node: &Node<T>, branch: Option<u8>) -> Result<(), InvariantError> {
        self.path.extend_from_slice(&node.prefix);

        if let Some(branch) = branch {
            match node.prefix.first() {
                None => return Err(InvariantError::EmptyPrefix { path: self.path.clone() }),
                Some(&first) if first != branch => {
                    return Err(InvariantError::MisfiledChild {
                        path: self.path.clone(),
                        branch,
                    })
                }
                Some(..) => (),
            }
        }
        if node.is_dangling() {
            return Err(InvariantError::DanglingNode { path: self.path.clone() });
        }
        if self.compacted && !node.has_value() && node.children.len() == 1 {
            return Err(InvariantError::UncompactedChain { path: self.path.clone() });
        }
        if node.has_value() {
            self.values += 1;
        }

        for (&b, child) in node.children.iter() {
            self.check_node(child, Some(b))?;
        }

        self.path.truncate(self.path.len() - node.prefix.len());
        Ok(())
    }
}
