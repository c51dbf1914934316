use crate::leaf::Leaf;
use crate::level::BASE_BITS;
use crate::node::Node;
use crate::traits::{Dot, UniverseSet};
use either::Either::{self, Left, Right};
use either::for_both;
use std::fmt;

/// One level of the tree: either the flat bit-vector base case or a recursive
/// internal node. [`Subtree::build`] chooses the representation from the
/// level's bit-count alone, so the tag never changes after construction and
/// every operation resolves it with a single match.
///
/// `Clone` is a structural deep copy (source and copy share no nodes);
/// dropping a subtree releases its children bottom-up.
#[derive(PartialEq, Eq, Clone)]
pub struct Subtree(Either<Leaf, Box<Node>>);

impl Subtree {
    /// Allocate an empty subtree managing a universe of `num_bits` bits.
    ///
    /// Levels of at most [`BASE_BITS`] bits become a [`Leaf`]; anything
    /// larger becomes a [`Node`], which recursively builds its summary and
    /// child slots.
    pub fn build(num_bits: u32) -> Self {
        if num_bits <= BASE_BITS {
            Subtree(Left(Leaf::new()))
        } else {
            Subtree(Right(Box::new(Node::build(num_bits))))
        }
    }

    /// Name of this subtree's graph node in [`Dot`] output.
    pub(crate) fn dot_name(&self, self_id: usize) -> String {
        match &self.0 {
            Left(_) => format!("L{self_id}"),
            Right(_) => format!("N{self_id}"),
        }
    }
}

/// Static dispatch of every per-level operation to the active representation
impl UniverseSet for Subtree {
    #[inline]
    fn is_empty(&self) -> bool {
        for_both!(&self.0, t => t.is_empty())
    }

    #[inline]
    fn contains(&self, value: u16) -> bool {
        for_both!(&self.0, t => t.contains(value))
    }

    #[inline]
    fn insert(&mut self, value: u16) -> bool {
        for_both!(&mut self.0, t => t.insert(value))
    }

    #[inline]
    fn erase(&mut self, value: u16) -> bool {
        for_both!(&mut self.0, t => t.erase(value))
    }

    #[inline]
    fn min(&self) -> Option<u16> {
        for_both!(&self.0, t => t.min())
    }

    #[inline]
    fn max(&self) -> Option<u16> {
        for_both!(&self.0, t => t.max())
    }

    #[inline]
    fn successor(&self, value: u16) -> Option<u16> {
        for_both!(&self.0, t => t.successor(value))
    }

    #[inline]
    fn predecessor(&self, value: u16) -> Option<u16> {
        for_both!(&self.0, t => t.predecessor(value))
    }
}

impl fmt::Debug for Subtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_both!(&self.0, t => write!(f, "{t:?}"))
    }
}

impl Dot for Subtree {
    fn dotviz(&self, self_id: usize) -> String {
        for_both!(&self.0, t => t.dotviz(self_id))
    }
}
