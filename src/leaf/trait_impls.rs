use super::*;
use crate::traits::{Dot, UniverseSet};
use std::fmt;

/// Debug formatting is of format `Leaf[{self.bits in binary representation}]`
impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaf[{:#018b}]", self.bits)
    }
}

/// Forward per-level set functionality to the bit container
impl UniverseSet for Leaf {
    #[inline]
    fn is_empty(&self) -> bool {
        Leaf::is_empty(self)
    }

    #[inline]
    fn contains(&self, value: u16) -> bool {
        Leaf::contains(self, value)
    }

    #[inline]
    fn insert(&mut self, value: u16) -> bool {
        Leaf::insert(self, value)
    }

    #[inline]
    fn erase(&mut self, value: u16) -> bool {
        Leaf::erase(self, value)
    }

    #[inline]
    fn min(&self) -> Option<u16> {
        Leaf::min(self)
    }

    #[inline]
    fn max(&self) -> Option<u16> {
        Leaf::max(self)
    }

    #[inline]
    fn successor(&self, value: u16) -> Option<u16> {
        Leaf::successor(self, value)
    }

    #[inline]
    fn predecessor(&self, value: u16) -> Option<u16> {
        Leaf::predecessor(self, value)
    }
}

impl Dot for Leaf {
    fn dotviz(&self, self_id: usize) -> String {
        format!(
            "L{self_id} [label=\"L{self_id}\\n{:#018b}\" shape=record];\n",
            self.bits
        )
    }
}
